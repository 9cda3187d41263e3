//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the engine. It maps
//! `crossterm` key and mouse events into [`InputIntent`]s: keys through a fixed
//! two-alias map, mouse press/release pairs through a swipe classifier.
//! [`InputListeners`] covers the event sources a host has to switch on and off
//! together with the engine they feed.

pub mod handler;
pub mod listeners;
pub mod map;
pub mod swipe;

pub use tui_snake_types as types;

pub use handler::{InputAdapter, CELL_PX_H, CELL_PX_W};
pub use listeners::{InputListeners, TerminalListeners};
pub use map::{handle_key_event, should_quit, InputIntent};
pub use swipe::{classify, SwipeTracker};
