//! Board lifecycle controller.
//!
//! Sits between a host UI and the game engine: derives the board size from
//! the viewport, owns the engine for that size, forwards the host's play
//! flag, routes input, and bridges engine notifications into [`HostState`].

pub mod controller;
pub mod host;
pub mod sizing;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use controller::{BoardController, HostCommand, ResizeOutcome};
pub use host::HostState;
pub use sizing::BoardSizing;
