//! Swipe gestures.
//!
//! A swipe is a single-contact press followed by a release. The vector from
//! press to release picks a direction along its dominant axis; gestures that
//! do not travel further than the threshold on either axis are noise.

use crate::types::{Direction, SWIPE_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeTracker {
    threshold: i32,
    start: Option<(i32, i32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD)
    }

    pub fn with_threshold(threshold: i32) -> Self {
        Self {
            threshold: threshold.max(0),
            start: None,
        }
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Pointer went down. Multi-contact presses are not swipes.
    pub fn press(&mut self, x: i32, y: i32, contacts: usize) {
        if contacts == 1 {
            self.start = Some((x, y));
        }
    }

    /// Pointer came up. Returns the swiped direction, if any.
    pub fn release(&mut self, x: i32, y: i32, contacts: usize) -> Option<Direction> {
        if contacts != 1 {
            return None;
        }
        let (sx, sy) = self.start.take()?;
        classify(x - sx, y - sy, self.threshold)
    }

    /// Forget a half-finished gesture.
    pub fn reset(&mut self) {
        self.start = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a displacement to a direction. Ties go to the vertical axis.
pub fn classify(dx: i32, dy: i32, threshold: i32) -> Option<Direction> {
    if dx.abs() <= threshold && dy.abs() <= threshold {
        return None;
    }
    if dx.abs() > dy.abs() {
        Some(if dx > 0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    }
}
