//! Error taxonomy shared across the arena crates

use std::time::Duration;
use thiserror::Error;

/// Faults raised by a player adapter while a game is in flight.
///
/// The orchestrator resolves these as forfeits; they never abort a
/// tournament.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("adapter io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("engine process is not running")]
    NotRunning,
    #[error("engine did not reply within {0:?}")]
    Timeout(Duration),
    #[error("malformed engine reply: {0}")]
    Malformed(String),
}

/// Pre-start validation failures surfaced to the caller
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least two players are required, got {0}")]
    NotEnoughPlayers(usize),
    #[error("at least one round is required")]
    NoRounds,
    #[error("duplicate player name: {0}")]
    DuplicateName(String),
    #[error("unknown engine spec: {0}")]
    UnknownEngineSpec(String),
}

/// Lifecycle misuse of the tournament runner
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("tournament already started")]
    AlreadyStarted,
    #[error("tournament is not running")]
    NotRunning,
}

/// Failures loading or saving a persisted score table
#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("failed to access standings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid standings file: {0}")]
    Json(#[from] serde_json::Error),
}
