//! RNG module - food placement
//!
//! Food is placed uniformly at random among the cells the snake does not
//! occupy. Placement draws exactly one random number per relocation, so a
//! given seed always reproduces the same game.
//!
//! Also provides a simple LCG for deterministic testing.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::GridCell;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock, for interactive play.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // The high bits of an LCG are far better distributed than the low ones.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Picks food cells uniformly among the free cells of the grid.
#[derive(Debug, Clone)]
pub struct FoodPlacer {
    rng: SimpleRng,
    /// Occupancy scratch buffer, reused across placements.
    occupied: Vec<bool>,
}

impl FoodPlacer {
    pub fn new(rng: SimpleRng) -> Self {
        Self {
            rng,
            occupied: Vec::new(),
        }
    }

    /// Choose a random cell not contained in `body`.
    ///
    /// Returns `None` when every cell of the grid is occupied.
    pub fn place<'a, I>(&mut self, grid_size: u16, body: I) -> Option<GridCell>
    where
        I: IntoIterator<Item = &'a GridCell>,
    {
        let total = usize::from(grid_size) * usize::from(grid_size);
        self.occupied.clear();
        self.occupied.resize(total, false);

        let mut taken = 0usize;
        for cell in body {
            if !cell.in_bounds(grid_size) {
                continue;
            }
            let slot = &mut self.occupied[cell.index(grid_size)];
            if !*slot {
                *slot = true;
                taken += 1;
            }
        }

        let free = total - taken;
        if free == 0 {
            return None;
        }

        let mut nth = self.rng.next_range(free as u32) as usize;
        for (idx, &is_taken) in self.occupied.iter().enumerate() {
            if is_taken {
                continue;
            }
            if nth == 0 {
                let size = usize::from(grid_size);
                return Some(GridCell::new((idx % size) as u16, (idx / size) as u16));
            }
            nth -= 1;
        }

        None
    }
}
