//! Terminal rendering for the snake board.
//!
//! The engine paints into a [`TermSurface`] (one framebuffer per board); the
//! host composes that into a screen-sized buffer with [`ScreenView`] and
//! flushes it with [`TerminalRenderer`], which only rewrites changed spans.
//! Cells are drawn two characters wide so the board looks square.

pub mod fb;
pub mod render_throttle;
pub mod renderer;
pub mod screen;
pub mod surface;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::{AnchorY, ScreenView};
pub use surface::{frame_size, TermSurface, TermSurfaceProvider};
