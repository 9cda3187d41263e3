//! Terminal snake (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof and carries the
//! application-level pieces: [`config::AppConfig`] and [`logging`] setup.

pub mod config;
pub mod logging;

pub use tui_snake_board as board;
pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub use config::AppConfig;
