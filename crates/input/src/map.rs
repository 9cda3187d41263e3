//! Key mapping from terminal events to input intents.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputIntent {
    /// Movement request, forwarded to the snake.
    Move(Direction),
    /// Flip the host's play flag.
    TogglePause,
    /// Discard the current game and start a fresh one.
    Restart,
}

/// Map keyboard input to intents.
pub fn handle_key_event(key: KeyEvent) -> Option<InputIntent> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputIntent::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputIntent::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputIntent::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputIntent::Move(Direction::Right))
        }

        // Host-level
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => Some(InputIntent::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputIntent::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
