//! Tournament configuration

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Knobs for a tournament run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Display name persisted with the tournament
    pub name: String,
    /// Number of rounds to play
    pub rounds: u32,
    /// Ply budget per game before a draw is declared
    pub max_plies: u32,
    /// Soft per-move think budget for subprocess engines, in
    /// milliseconds
    pub move_time_ms: u64,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: "arena".to_string(),
            rounds: 3,
            max_plies: 200,
            move_time_ms: 500,
        }
    }
}

impl TournamentConfig {
    /// Load from a TOML file; missing keys fall back to the defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn move_time(&self) -> Duration {
        Duration::from_millis(self.move_time_ms)
    }
}
