//! Game engine - simulation, state machine and render dispatch
//!
//! The engine owns every piece of mutable game state (snake, food, score and
//! status). The host drives it through [`GameEngine::on_frame`] once per
//! display frame; logical steps happen at the slower tick cadence configured
//! in [`GameConfig`], rendering happens on every delivered frame.
//!
//! Score and game-over changes are reported through [`Observers`], which keeps
//! the engine ignorant of how the host stores UI state.

use std::fmt;

use tracing::{debug, error, info};

use crate::config::GameConfig;
use crate::frame::FrameLoop;
use crate::rng::FoodPlacer;
use crate::snake::{Snake, SnakeError};
use crate::snapshot::GameSnapshot;
use crate::surface::{Hud, Paint, Surface, SurfaceError};
use crate::types::{Direction, GameStatus, GridCell, MIN_GRID_SIZE};

/// Host callbacks for score and terminal-state changes.
pub struct Observers {
    on_score_change: Box<dyn FnMut(u32)>,
    on_game_over: Box<dyn FnMut(bool)>,
}

impl Observers {
    pub fn new<F, G>(on_score_change: F, on_game_over: G) -> Self
    where
        F: FnMut(u32) + 'static,
        G: FnMut(bool) + 'static,
    {
        Self {
            on_score_change: Box::new(on_score_change),
            on_game_over: Box::new(on_game_over),
        }
    }

    /// Observers that ignore every notification.
    pub fn noop() -> Self {
        Self::new(|_| {}, |_| {})
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    GridTooSmall { grid_size: u16, min: u16 },
    InvalidLayout(String),
    Snake(SnakeError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::GridTooSmall { grid_size, min } => {
                write!(f, "grid of {grid_size} cells is too small (need at least {min})")
            }
            EngineError::InvalidLayout(why) => write!(f, "invalid layout: {why}"),
            EngineError::Snake(err) => write!(f, "invalid snake: {err}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<SnakeError> for EngineError {
    fn from(err: SnakeError) -> Self {
        EngineError::Snake(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    Wall,
    Body,
}

/// Result of one logical step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Engine not running; nothing happened.
    Skipped,
    Moved,
    Ate { score: u32 },
    Collided(Collision),
    /// The snake filled every cell; no room is left for food.
    BoardFull,
}

/// Result of one delivered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No frame was scheduled; the callback did nothing.
    NotScheduled,
    Rendered { stepped: bool },
}

/// Smallest grid that can hold a fresh snake of `length` at its centre.
pub fn min_grid_for(length: u16) -> u16 {
    MIN_GRID_SIZE.max(length.saturating_sub(1).saturating_mul(2))
}

#[derive(Debug)]
pub struct GameEngine<S: Surface> {
    surface: S,
    grid_size: u16,
    snake: Snake,
    food: GridCell,
    placer: FoodPlacer,
    score: u32,
    score_per_food: u32,
    status: GameStatus,
    frames: FrameLoop,
    observers: Observers,
    steps: u64,
}

impl<S: Surface> GameEngine<S> {
    /// Create an engine on `surface` for a `grid_size × grid_size` board.
    ///
    /// The snake is seeded at the centre of the grid travelling right and food
    /// is placed straight away. The first frame is scheduled so the board gets
    /// painted; when `is_playing` is set the engine starts running immediately.
    pub fn new(
        surface: S,
        grid_size: u16,
        initial_score: u32,
        observers: Observers,
        is_playing: bool,
        config: &GameConfig,
    ) -> Result<Self, EngineError> {
        let length = config.initial_length.max(1);
        let min = min_grid_for(length);
        if grid_size < min {
            return Err(EngineError::GridTooSmall { grid_size, min });
        }

        let centre = GridCell::new(grid_size / 2, grid_size / 2);
        let snake = Snake::new(centre, Direction::Right, length);
        let mut placer = FoodPlacer::new(config.rng());
        let food = placer
            .place(grid_size, snake.body())
            .ok_or(EngineError::GridTooSmall { grid_size, min })?;

        let mut engine = Self {
            surface,
            grid_size,
            snake,
            food,
            placer,
            score: initial_score,
            score_per_food: config.score_per_food,
            status: GameStatus::Idle,
            frames: FrameLoop::new(config.tick_interval_ms),
            observers,
            steps: 0,
        };
        engine.frames.request_frame();

        debug!(
            grid_size,
            initial_score,
            tick_ms = config.tick_interval_ms,
            food = %engine.food,
            "engine created"
        );

        if is_playing {
            engine.animate(true);
        }
        Ok(engine)
    }

    /// Replace the seeded snake and food with an explicit layout.
    pub fn with_layout(mut self, snake: Snake, food: GridCell) -> Result<Self, EngineError> {
        if let Some(cell) = snake.body().find(|c| !c.in_bounds(self.grid_size)) {
            return Err(EngineError::InvalidLayout(format!(
                "snake segment {cell} outside grid"
            )));
        }
        if !food.in_bounds(self.grid_size) {
            return Err(EngineError::InvalidLayout(format!("food {food} outside grid")));
        }
        if snake.occupies(food) {
            return Err(EngineError::InvalidLayout(format!("food {food} on snake")));
        }
        self.snake = snake;
        self.food = food;
        Ok(self)
    }

    /// Bridge the host's play flag into the state machine.
    ///
    /// `true` starts or resumes (Idle/Paused → Running) with a fresh time base;
    /// `false` pauses a running game. Repeated calls are no-ops, and nothing
    /// leaves GameOver.
    pub fn animate(&mut self, is_playing: bool) {
        match (is_playing, self.status) {
            (true, GameStatus::Idle | GameStatus::Paused) => {
                debug!(from = self.status.as_str(), "engine running");
                self.status = GameStatus::Running;
                self.frames.resync();
                self.frames.request_frame();
            }
            (true, GameStatus::Running) if !self.frames.is_scheduled() => {
                debug!("frame loop re-armed");
                self.frames.resync();
                self.frames.request_frame();
            }
            (false, GameStatus::Running) => {
                debug!("engine paused");
                self.status = GameStatus::Paused;
                self.frames.request_frame();
            }
            _ => {}
        }
    }

    /// Cancel the scheduled frame. The status is left as-is.
    pub fn stop_animation(&mut self) {
        if self.frames.cancel() {
            debug!(status = self.status.as_str(), "frame loop stopped");
        }
    }

    /// Per-frame callback.
    ///
    /// Does nothing unless a frame was scheduled. Otherwise accounts for the
    /// elapsed time, performs at most one logical step, renders, and schedules
    /// the next frame while the game is running or paused. Render failures are
    /// logged and do not stop the loop.
    pub fn on_frame(&mut self, now_ms: u64) -> FrameOutcome {
        if self.frames.begin_frame().is_none() {
            return FrameOutcome::NotScheduled;
        }

        let stepped = match self.status {
            GameStatus::Running if self.frames.advance(now_ms) => {
                self.step();
                true
            }
            GameStatus::Paused => {
                self.frames.observe(now_ms);
                false
            }
            _ => false,
        };

        if let Err(err) = self.render() {
            error!(%err, now_ms, "frame render failed");
        }

        if matches!(self.status, GameStatus::Running | GameStatus::Paused) {
            self.frames.request_frame();
        }

        FrameOutcome::Rendered { stepped }
    }

    /// Advance the simulation by one cell.
    pub fn step(&mut self) -> StepOutcome {
        if self.status != GameStatus::Running {
            return StepOutcome::Skipped;
        }
        self.steps += 1;

        let direction = self.snake.resolve_direction();
        let Some(candidate) = self.snake.head().offset(direction, self.grid_size) else {
            debug!(head = %self.snake.head(), %direction, "wall collision");
            return self.collide(Collision::Wall);
        };

        if self.snake.hits_body(candidate) {
            debug!(head = %candidate, "body collision");
            return self.collide(Collision::Body);
        }

        if candidate == self.food {
            self.snake.grow(candidate);
            self.score = self.score.saturating_add(self.score_per_food);
            (self.observers.on_score_change)(self.score);

            match self.placer.place(self.grid_size, self.snake.body()) {
                Some(cell) => {
                    self.food = cell;
                    debug!(score = self.score, food = %cell, "food eaten");
                }
                None => {
                    info!(score = self.score, "board full");
                    self.end_game();
                    return StepOutcome::BoardFull;
                }
            }
            return StepOutcome::Ate { score: self.score };
        }

        self.snake.advance(candidate);
        StepOutcome::Moved
    }

    pub fn change_movement(&mut self, direction: Direction) -> bool {
        self.snake.change_movement(direction)
    }

    fn collide(&mut self, collision: Collision) -> StepOutcome {
        self.end_game();
        StepOutcome::Collided(collision)
    }

    fn end_game(&mut self) {
        self.status = GameStatus::GameOver;
        info!(score = self.score, steps = self.steps, len = self.snake.len(), "game over");
        (self.observers.on_game_over)(true);
    }

    fn render(&mut self) -> Result<(), SurfaceError> {
        self.surface.clear(self.grid_size)?;
        self.surface.paint(self.food, Paint::Food)?;
        for (i, &cell) in self.snake.body().enumerate() {
            let paint = if i == 0 { Paint::Head } else { Paint::Body };
            self.surface.paint(cell, paint)?;
        }
        self.surface.draw_hud(Hud {
            score: self.score,
            status: self.status,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn grid_size(&self) -> u16 {
        self.grid_size
    }

    pub fn food(&self) -> GridCell {
        self.food
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Mutable access for input; body mutation stays crate-internal.
    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_frame_scheduled(&self) -> bool {
        self.frames.is_scheduled()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid_size: self.grid_size,
            body: self.snake.body().copied().collect(),
            direction: self.snake.direction(),
            food: self.food,
            score: self.score,
            status: self.status,
            steps: self.steps,
        }
    }
}
