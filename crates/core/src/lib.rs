//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the snake rules, the engine state machine and the frame
//! scheduling that decouples logical steps from the host's render cadence.
//! It has **no dependencies** on terminals, input devices or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is exercised headless through [`GridSurface`]
//! - **Portable**: Any host that can deliver frame timestamps and paint grid
//!   cells can run it
//!
//! # Module Structure
//!
//! - [`snake`]: body sequence and pending-direction arbitration
//! - [`engine`]: frame callback, logical step, collisions, render dispatch
//! - [`frame`]: frame requests and the fixed-cadence step accumulator
//! - [`surface`]: the drawing seam and an in-memory implementation
//! - [`rng`]: LCG and uniform food placement
//! - [`config`]: tick interval, per-food score, initial length, seed
//! - [`snapshot`]: serializable view of the engine state
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameEngine, GridSurface, Observers};
//! use tui_snake_core::types::{Direction, GameStatus};
//!
//! let config = GameConfig::seeded(12345);
//! let mut engine =
//!     GameEngine::new(GridSurface::new(), 10, 0, Observers::noop(), true, &config).unwrap();
//!
//! engine.change_movement(Direction::Up);
//!
//! // Frames arrive every ~16ms; a step happens once 150ms have accumulated.
//! let mut now = 0;
//! while engine.steps() == 0 {
//!     engine.on_frame(now);
//!     now += 16;
//! }
//! assert_eq!(engine.snake().direction(), Direction::Up);
//! assert_eq!(engine.status(), GameStatus::Running);
//! ```

pub mod config;
pub mod engine;
pub mod frame;
pub mod rng;
pub mod snake;
pub mod snapshot;
pub mod surface;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use engine::{Collision, EngineError, FrameOutcome, GameEngine, Observers, StepOutcome};
pub use frame::{FrameLoop, FrameRequest};
pub use rng::{FoodPlacer, SimpleRng};
pub use snake::{Snake, SnakeError};
pub use snapshot::GameSnapshot;
pub use surface::{GridSurface, GridSurfaceProvider, Hud, Paint, Surface, SurfaceError, SurfaceProvider};
