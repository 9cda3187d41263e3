//! Input adapter: raw terminal events to intents.
//!
//! Keyboard and mouse events are translated into [`InputIntent`]s. Mouse
//! presses and releases are treated as a single-contact swipe, with terminal
//! cells scaled to approximate pixels so the swipe threshold keeps its meaning.

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::trace;

use crate::map::{handle_key_event, InputIntent};
use crate::swipe::SwipeTracker;

/// Approximate pixel width of a terminal cell.
pub const CELL_PX_W: i32 = 8;
/// Approximate pixel height of a terminal cell.
pub const CELL_PX_H: i32 = 16;

#[derive(Debug, Clone)]
pub struct InputAdapter {
    swipe: SwipeTracker,
    attached: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::with_swipe(SwipeTracker::new())
    }

    pub fn with_swipe(swipe: SwipeTracker) -> Self {
        Self {
            swipe,
            attached: false,
        }
    }

    /// Start accepting events.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stop accepting events and drop any half-finished gesture.
    pub fn detach(&mut self) {
        self.attached = false;
        self.swipe.reset();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Translate one event. Detached adapters ignore everything.
    pub fn translate(&mut self, event: &Event) -> Option<InputIntent> {
        if !self.attached {
            return None;
        }
        let intent = match event {
            Event::Key(key) => self.translate_key(*key),
            Event::Mouse(mouse) => self.translate_mouse(*mouse),
            _ => None,
        };
        if let Some(intent) = intent {
            trace!(?intent, "input intent");
        }
        intent
    }

    fn translate_key(&mut self, key: KeyEvent) -> Option<InputIntent> {
        match key.kind {
            KeyEventKind::Press => handle_key_event(key),
            // Auto-repeat only makes sense for movement.
            KeyEventKind::Repeat => match handle_key_event(key) {
                Some(InputIntent::Move(dir)) => Some(InputIntent::Move(dir)),
                _ => None,
            },
            KeyEventKind::Release => None,
        }
    }

    fn translate_mouse(&mut self, mouse: MouseEvent) -> Option<InputIntent> {
        let x = i32::from(mouse.column) * CELL_PX_W;
        let y = i32::from(mouse.row) * CELL_PX_H;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.press(x, y, 1);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.swipe.release(x, y, 1).map(InputIntent::Move)
            }
            _ => None,
        }
    }
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new()
    }
}
