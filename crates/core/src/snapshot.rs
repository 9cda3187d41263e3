use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::types::{Direction, GameStatus, GridCell};

/// Owned copy of the observable engine state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub grid_size: u16,
    pub body: Vec<GridCell>,
    pub direction: Direction,
    pub food: GridCell,
    pub score: u32,
    pub status: GameStatus,
    pub steps: u64,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Stable hash of the snapshot, used to skip redundant terminal flushes.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Fnv1a64::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// FNV-1a; fixed seed so fingerprints do not vary between runs.
struct Fnv1a64 {
    state: u64,
}

impl Fnv1a64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET,
        }
    }
}

impl Hasher for Fnv1a64 {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}
