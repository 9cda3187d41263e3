//! Board lifecycle: one engine per board size.
//!
//! The controller owns at most one [`GameEngine`] at a time. A size change
//! tears the old engine down and builds a new one; play/pause only forwards
//! to the live engine. Input listeners are attached exactly while an engine
//! exists.

use std::rc::Rc;

use crossterm::event::Event;
use tracing::{debug, error, info, warn};
use tui_snake_core::{FrameOutcome, GameConfig, GameEngine, Observers, SurfaceProvider};
use tui_snake_input::{InputAdapter, InputIntent, InputListeners};
use tui_snake_types::{Direction, Viewport};

use crate::host::HostState;
use crate::sizing::BoardSizing;

type Engine<P> = GameEngine<<P as SurfaceProvider>::Surface>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// Same board side; the engine was kept.
    Unchanged,
    /// A fresh engine was built for a board of `side` cells.
    Rebuilt { side: u16 },
    /// No surface or engine could be set up; there is no board.
    Unavailable,
}

/// What the controller did with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Moved { direction: Direction, accepted: bool },
    PlayToggled { playing: bool },
    Restarted(ResizeOutcome),
}

struct Session<P: SurfaceProvider> {
    engine: Engine<P>,
    side: u16,
}

pub struct BoardController<P: SurfaceProvider, L: InputListeners> {
    provider: P,
    listeners: L,
    adapter: InputAdapter,
    sizing: BoardSizing,
    config: GameConfig,
    host: Rc<HostState>,
    session: Option<Session<P>>,
    viewport: Option<Viewport>,
    generation: u32,
}

impl<P: SurfaceProvider, L: InputListeners> BoardController<P, L> {
    pub fn new(provider: P, listeners: L, sizing: BoardSizing, config: GameConfig) -> Self {
        Self {
            provider,
            listeners,
            adapter: InputAdapter::new(),
            sizing,
            config,
            host: Rc::new(HostState::new()),
            session: None,
            viewport: None,
            generation: 0,
        }
    }

    /// Use an existing host state instead of a private one.
    pub fn with_host(mut self, host: Rc<HostState>) -> Self {
        self.host = host;
        self
    }

    /// React to the host's drawing area. The engine is rebuilt only when the
    /// board side changes, or when there is no engine yet.
    ///
    /// A rebuild after game over starts a fresh, paused game: the host's
    /// score and game-over flag are cleared along with the old engine.
    pub fn resize(&mut self, viewport: Viewport) -> ResizeOutcome {
        self.viewport = Some(viewport);
        let side = self.sizing.side_for(viewport);
        if self.session.as_ref().is_some_and(|s| s.side == side) {
            return ResizeOutcome::Unchanged;
        }
        if self.host.is_game_over() {
            debug!(score = self.host.score(), "resize after game over, fresh game");
            self.host.reset();
            self.host.set_playing(false);
        }
        self.rebuild(viewport, side)
    }

    fn rebuild(&mut self, viewport: Viewport, side: u16) -> ResizeOutcome {
        self.teardown();

        let surface = match self.provider.acquire(viewport, side) {
            Ok(surface) => surface,
            Err(err) => {
                error!(%err, side, width = viewport.width, height = viewport.height, "no drawing surface");
                return ResizeOutcome::Unavailable;
            }
        };

        let playing = self.host.is_playing() && !self.host.is_game_over();
        let engine = match GameEngine::new(
            surface,
            side,
            self.host.score(),
            observers(&self.host),
            playing,
            &self.game_config(),
        ) {
            Ok(engine) => engine,
            Err(err) => {
                error!(%err, side, "engine construction failed");
                return ResizeOutcome::Unavailable;
            }
        };

        self.session = Some(Session { engine, side });
        self.attach_input();
        info!(side, playing, score = self.host.score(), "board built");
        ResizeOutcome::Rebuilt { side }
    }

    fn game_config(&self) -> GameConfig {
        let mut config = self.config.clone();
        config.seed = config.seed.map(|seed| seed.wrapping_add(self.generation));
        config
    }

    fn attach_input(&mut self) {
        self.adapter.attach();
        if let Err(err) = self.listeners.attach() {
            warn!(%err, "attaching input listeners failed");
        }
    }

    fn detach_input(&mut self) {
        self.adapter.detach();
        if let Err(err) = self.listeners.detach() {
            warn!(%err, "detaching input listeners failed");
        }
    }

    /// Forward the host's play flag. Refused while the host shows game over.
    pub fn set_playing(&mut self, playing: bool) -> bool {
        if playing && self.host.is_game_over() {
            debug!("play refused: game over");
            return false;
        }
        self.host.set_playing(playing);
        if let Some(session) = self.session.as_mut() {
            session.engine.animate(playing);
        }
        true
    }

    /// Flip the play flag; returns the flag afterwards.
    pub fn toggle_playing(&mut self) -> bool {
        self.set_playing(!self.host.is_playing());
        self.host.is_playing()
    }

    /// Route one terminal event through the input adapter.
    pub fn handle_event(&mut self, event: &Event) -> Option<HostCommand> {
        let intent = self.adapter.translate(event)?;
        match intent {
            InputIntent::Move(direction) => {
                let session = self.session.as_mut()?;
                let accepted = session.engine.change_movement(direction);
                Some(HostCommand::Moved {
                    direction,
                    accepted,
                })
            }
            InputIntent::TogglePause => Some(HostCommand::PlayToggled {
                playing: self.toggle_playing(),
            }),
            InputIntent::Restart => Some(HostCommand::Restarted(self.restart())),
        }
    }

    /// Deliver a frame timestamp to the live engine.
    pub fn on_frame(&mut self, now_ms: u64) -> FrameOutcome {
        match self.session.as_mut() {
            Some(session) => session.engine.on_frame(now_ms),
            None => FrameOutcome::NotScheduled,
        }
    }

    /// Throw the current game away and start a new one, playing.
    pub fn restart(&mut self) -> ResizeOutcome {
        self.generation = self.generation.wrapping_add(1);
        self.host.reset();
        self.host.set_playing(true);
        info!(generation = self.generation, "restart");

        match self.viewport {
            Some(viewport) => {
                let side = self.sizing.side_for(viewport);
                self.rebuild(viewport, side)
            }
            None => ResizeOutcome::Unavailable,
        }
    }

    /// Stop the engine and detach input. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.engine.stop_animation();
            self.detach_input();
            debug!(side = session.side, "board torn down");
        }
    }

    pub fn engine(&self) -> Option<&Engine<P>> {
        self.session.as_ref().map(|s| &s.engine)
    }

    pub fn engine_mut(&mut self) -> Option<&mut Engine<P>> {
        self.session.as_mut().map(|s| &mut s.engine)
    }

    pub fn surface(&self) -> Option<&P::Surface> {
        self.engine().map(|e| e.surface())
    }

    pub fn side(&self) -> Option<u16> {
        self.session.as_ref().map(|s| s.side)
    }

    pub fn host(&self) -> &Rc<HostState> {
        &self.host
    }

    pub fn listeners(&self) -> &L {
        &self.listeners
    }

    pub fn adapter(&self) -> &InputAdapter {
        &self.adapter
    }
}

impl<P: SurfaceProvider, L: InputListeners> Drop for BoardController<P, L> {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn observers(host: &Rc<HostState>) -> Observers {
    let on_score = Rc::clone(host);
    let on_over = Rc::clone(host);
    Observers::new(
        move |score| on_score.set_score(score),
        move |over| {
            on_over.set_game_over(over);
            if over {
                on_over.set_playing(false);
            }
        },
    )
}
