//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain values with no behaviour beyond small helpers, making
//! them usable in any context (engine logic, input mapping, terminal rendering).
//!
//! # Grid
//!
//! The playfield is a square grid of `grid_size × grid_size` cells. Cells are
//! addressed by `(x, y)` with the origin in the top-left corner: `x` grows to
//! the right and `y` grows downward, so [`Direction::Up`] decreases `y`.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host frame pacing (~60 FPS) |
//! | `DEFAULT_TICK_INTERVAL_MS` | 150 | Logical step cadence |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GridCell};
//!
//! let head = GridCell::new(0, 5);
//! assert_eq!(head.offset(Direction::Right, 10), Some(GridCell::new(1, 5)));
//! assert_eq!(head.offset(Direction::Left, 10), None);
//!
//! let dir: Direction = "to top".parse().unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert!(dir.is_opposite(Direction::Down));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Default logical step interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 150;

/// Default score awarded per food eaten.
pub const DEFAULT_SCORE_PER_FOOD: u32 = 10;

/// Default initial snake length.
pub const DEFAULT_SNAKE_LENGTH: u16 = 3;

/// Smallest grid the engine accepts.
pub const MIN_GRID_SIZE: u16 = 4;

/// Swipe distance (in pointer units) a gesture must exceed to count.
pub const SWIPE_THRESHOLD: i32 = 30;

/// A cell on the square playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    pub x: u16,
    pub y: u16,
}

impl GridCell {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies inside a `grid_size × grid_size` grid.
    pub fn in_bounds(self, grid_size: u16) -> bool {
        self.x < grid_size && self.y < grid_size
    }

    /// The neighbouring cell one unit away in `direction`.
    ///
    /// Returns `None` when the neighbour would fall outside the grid.
    pub fn offset(self, direction: Direction, grid_size: u16) -> Option<GridCell> {
        let (dx, dy) = direction.delta();
        let x = i32::from(self.x) + dx;
        let y = i32::from(self.y) + dy;
        let limit = i32::from(grid_size);
        if x < 0 || y < 0 || x >= limit || y >= limit {
            return None;
        }
        Some(GridCell::new(x as u16, y as u16))
    }

    /// Row-major index into a `grid_size × grid_size` buffer.
    pub fn index(self, grid_size: u16) -> usize {
        usize::from(self.y) * usize::from(grid_size) + usize::from(self.x)
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Unit offset `(dx, dy)`; `y` grows downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Movement string used by host-facing input layers.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Down.as_movement_str(), "to bottom");
    /// ```
    pub fn as_movement_str(self) -> &'static str {
        match self {
            Direction::Up => "to top",
            Direction::Down => "to bottom",
            Direction::Left => "to left",
            Direction::Right => "to right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_movement_str())
    }
}

/// Error returned when a movement string is not one of the four known values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMovement(pub String);

impl fmt::Display for UnknownMovement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown movement: {:?}", self.0)
    }
}

impl std::error::Error for UnknownMovement {}

impl FromStr for Direction {
    type Err = UnknownMovement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "to top" => Ok(Direction::Up),
            "to bottom" => Ok(Direction::Down),
            "to left" => Ok(Direction::Left),
            "to right" => Ok(Direction::Right),
            other => Err(UnknownMovement(other.to_string())),
        }
    }
}

/// Engine lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self == GameStatus::GameOver
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "game_over",
        }
    }
}

/// Host drawing area dimensions (terminal cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_offset_respects_bounds() {
        let corner = GridCell::new(9, 9);
        assert_eq!(corner.offset(Direction::Right, 10), None);
        assert_eq!(corner.offset(Direction::Down, 10), None);
        assert_eq!(corner.offset(Direction::Up, 10), Some(GridCell::new(9, 8)));

        let origin = GridCell::new(0, 0);
        assert_eq!(origin.offset(Direction::Up, 10), None);
        assert_eq!(origin.offset(Direction::Left, 10), None);
    }

    #[test]
    fn test_movement_strings_round_trip_through_parse() {
        for dir in Direction::ALL {
            assert_eq!(dir.as_movement_str().parse::<Direction>(), Ok(dir));
        }
        assert!("to nowhere".parse::<Direction>().is_err());
    }

    #[test]
    fn test_index_is_row_major() {
        assert_eq!(GridCell::new(3, 2).index(10), 23);
        assert!(GridCell::new(9, 9).in_bounds(10));
        assert!(!GridCell::new(10, 0).in_bounds(10));
    }

    #[test]
    fn default_timing_constants() {
        assert_eq!(FRAME_MS, 16);
        assert_eq!(DEFAULT_TICK_INTERVAL_MS, 150);
        assert_eq!(DEFAULT_SCORE_PER_FOOD, 10);
        assert_eq!(SWIPE_THRESHOLD, 30);
    }
}
