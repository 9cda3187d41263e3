//! Snake entity - body sequence and direction arbitration
//!
//! The body is stored head-first. Movement requests from input land in a
//! single pending slot and are applied by the engine at the start of the next
//! logical step, so input never mutates the body directly.

use std::collections::VecDeque;
use std::fmt;

use crate::types::{Direction, GridCell};

/// Reasons a body cannot form a snake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnakeError {
    EmptyBody,
    Overlapping(GridCell),
}

impl fmt::Display for SnakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeError::EmptyBody => f.write_str("snake body must not be empty"),
            SnakeError::Overlapping(cell) => write!(f, "snake body overlaps itself at {cell}"),
        }
    }
}

impl std::error::Error for SnakeError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<GridCell>,
    direction: Direction,
    pending: Option<Direction>,
}

impl Snake {
    /// Create a straight snake whose head is at `head`, travelling in
    /// `direction`, with the rest of the body trailing behind it.
    ///
    /// Segments that would fall before the origin are dropped, so the
    /// resulting length may be shorter than requested near the top/left edge.
    pub fn new(head: GridCell, direction: Direction, length: u16) -> Self {
        let (dx, dy) = direction.delta();
        let mut body = VecDeque::with_capacity(usize::from(length.max(1)));
        body.push_back(head);

        for i in 1..i32::from(length.max(1)) {
            let x = i32::from(head.x) - dx * i;
            let y = i32::from(head.y) - dy * i;
            if x < 0 || y < 0 || x > i32::from(u16::MAX) || y > i32::from(u16::MAX) {
                break;
            }
            body.push_back(GridCell::new(x as u16, y as u16));
        }

        Self {
            body,
            direction,
            pending: None,
        }
    }

    /// Build a snake from an explicit head-first body.
    pub fn from_body<I>(cells: I, direction: Direction) -> Result<Self, SnakeError>
    where
        I: IntoIterator<Item = GridCell>,
    {
        let body: VecDeque<GridCell> = cells.into_iter().collect();
        if body.is_empty() {
            return Err(SnakeError::EmptyBody);
        }
        for (i, cell) in body.iter().enumerate() {
            if body.iter().skip(i + 1).any(|other| other == cell) {
                return Err(SnakeError::Overlapping(*cell));
            }
        }

        Ok(Self {
            body,
            direction,
            pending: None,
        })
    }

    /// Request a new direction of travel.
    ///
    /// Reversals and repeats of the already-pending direction are ignored.
    /// Otherwise the request overwrites the pending slot: only the most recent
    /// accepted request before the next step takes effect.
    ///
    /// Returns whether the request was accepted.
    pub fn change_movement(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) || self.pending == Some(direction) {
            return false;
        }
        self.pending = Some(direction);
        true
    }

    pub fn head(&self) -> GridCell {
        self.body[0]
    }

    pub fn tail(&self) -> GridCell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = &GridCell> + '_ {
        self.body.iter()
    }

    pub fn occupies(&self, cell: GridCell) -> bool {
        self.body.contains(&cell)
    }

    /// Whether moving the head into `cell` would hit the body.
    ///
    /// The tail is excluded: it vacates its cell during the same step.
    pub fn hits_body(&self, cell: GridCell) -> bool {
        let keep = self.body.len() - 1;
        self.body.iter().take(keep).any(|&segment| segment == cell)
    }

    /// Consume the pending direction, making it the direction of travel.
    pub(crate) fn resolve_direction(&mut self) -> Direction {
        if let Some(next) = self.pending.take() {
            self.direction = next;
        }
        self.direction
    }

    /// Move the head into `cell` and drop the tail.
    pub(crate) fn advance(&mut self, cell: GridCell) {
        self.body.push_front(cell);
        self.body.pop_back();
    }

    /// Move the head into `cell`, keeping the tail (grow by one).
    pub(crate) fn grow(&mut self, cell: GridCell) {
        self.body.push_front(cell);
    }
}
