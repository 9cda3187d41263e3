//! Engine tuning.

use serde::{Deserialize, Serialize};

use crate::rng::SimpleRng;
use crate::types::{DEFAULT_SCORE_PER_FOOD, DEFAULT_SNAKE_LENGTH, DEFAULT_TICK_INTERVAL_MS};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Milliseconds between logical steps.
    pub tick_interval_ms: u32,
    /// Score awarded per food eaten.
    pub score_per_food: u32,
    /// Initial snake length.
    pub initial_length: u16,
    /// Fixed RNG seed; `None` seeds from the clock.
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            score_per_food: DEFAULT_SCORE_PER_FOOD,
            initial_length: DEFAULT_SNAKE_LENGTH,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse from a JSON document; missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Apply `SNAKE_TICK_MS`, `SNAKE_SCORE_PER_FOOD`, `SNAKE_INITIAL_LENGTH`
    /// and `SNAKE_SEED` overrides. Unparseable values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        use std::env;

        if let Some(v) = env::var("SNAKE_TICK_MS").ok().and_then(|s| s.parse().ok()) {
            self.tick_interval_ms = v;
        }
        if let Some(v) = env::var("SNAKE_SCORE_PER_FOOD")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.score_per_food = v;
        }
        if let Some(v) = env::var("SNAKE_INITIAL_LENGTH")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.initial_length = v;
        }
        if let Some(v) = env::var("SNAKE_SEED").ok().and_then(|s| s.parse().ok()) {
            self.seed = Some(v);
        }
        self
    }

    /// Fixed-seed config, for reproducible runs.
    pub fn seeded(seed: u32) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn rng(&self) -> SimpleRng {
        match self.seed {
            Some(seed) => SimpleRng::new(seed),
            None => SimpleRng::from_clock(),
        }
    }
}
