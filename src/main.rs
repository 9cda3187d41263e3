//! Terminal snake runner (default binary).
//!
//! Frames are paced at a fixed interval; input is drained between frames.
//! The board controller owns the engine and rebuilds it on resize.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use tracing::{debug, info};

use tui_snake::board::BoardController;
use tui_snake::input::{should_quit, TerminalListeners};
use tui_snake::term::{FrameBuffer, RenderThrottle, ScreenView, TermSurfaceProvider, TerminalRenderer};
use tui_snake::types::{GameStatus, Viewport};
use tui_snake::{logging, AppConfig};

/// Keep-alive redraw interval while nothing moves.
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    logging::init(config.log_path.as_deref())?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::stdout();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: AppConfig) -> Result<()> {
    let provider = TermSurfaceProvider::new(config.board.cell_w, config.board.cell_h);
    let mut board = BoardController::new(
        provider,
        TerminalListeners::stdout(),
        config.board,
        config.game.clone(),
    );
    let view = ScreenView::new();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut screen = FrameBuffer::new(0, 0);

    let (w, h) = terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    board.resize(viewport);

    let frame = Duration::from_millis(config.frame_ms.max(1));
    let start = Instant::now();
    let mut next_frame = start;

    loop {
        let now_ms = start.elapsed().as_millis() as u64;
        board.on_frame(now_ms);

        let (fingerprint, animating) = board
            .engine()
            .map(|e| (e.snapshot().fingerprint(), e.status() == GameStatus::Running))
            .unwrap_or((0, false));
        if throttle.should_render(now_ms, fingerprint, !animating) {
            view.compose_into(board.surface().map(|s| s.frame()), viewport, &mut screen);
            term.draw_swap(&mut screen)?;
        }

        next_frame += frame;
        let now = Instant::now();
        if next_frame < now {
            next_frame = now;
        }

        while event::poll(next_frame.saturating_duration_since(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
                    info!(score = board.host().score(), "quit");
                    return Ok(());
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    let outcome = board.resize(viewport);
                    debug!(?outcome, w, h, "terminal resized");
                    term.invalidate();
                    throttle.reset();
                }
                event => {
                    if let Some(command) = board.handle_event(&event) {
                        debug!(?command, "host command");
                    }
                }
            }
        }
    }
}
