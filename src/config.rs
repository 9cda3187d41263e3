//! Application configuration: optional JSON file, then environment.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use tui_snake_board::BoardSizing;
use tui_snake_core::GameConfig;
use tui_snake_types::FRAME_MS;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub board: BoardSizing,
    /// Target interval between delivered frames.
    pub frame_ms: u64,
    /// Log file; logging is off without one.
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            board: BoardSizing::default(),
            frame_ms: u64::from(FRAME_MS),
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Read `SNAKE_CONFIG_PATH` if set, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let base = match env::var("SNAKE_CONFIG_PATH") {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::default(),
        };
        Ok(base.with_env_overrides())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn with_env_overrides(mut self) -> Self {
        self.game = self.game.with_env_overrides();
        if let Some(path) = env::var("SNAKE_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            self.log_path = Some(PathBuf::from(path));
        }
        self
    }
}
