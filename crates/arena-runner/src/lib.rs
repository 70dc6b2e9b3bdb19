//! Tournament orchestration for the engine arena
//!
//! This crate provides infrastructure for:
//! - Driving games between player adapters (in-process heuristics or
//!   UCI engine subprocesses)
//! - Pairing players round by round and tracking standings
//! - Handing finished games to a persistence sink
//!
//! # Usage
//!
//! ```bash
//! # Three heuristic players, two rounds
//! cargo run -p arena-runner -- --rounds 2 random capture greedy
//!
//! # Pit a UCI engine against the greedy heuristic
//! cargo run -p arena-runner -- uci:/usr/local/bin/stockfish greedy
//! ```

pub mod adapter;
pub mod config;
pub mod game;
pub mod heuristics;
pub mod pairing;
pub mod rules;
pub mod sink;
pub mod tournament;
pub mod uci;

pub use adapter::{contestant_from_descriptor, descriptor_from_spec, Contestant, PlayerAdapter};
pub use config::TournamentConfig;
pub use game::GameOrchestrator;
pub use heuristics::{CaptureAdapter, GreedyMaterialAdapter, RandomAdapter};
pub use pairing::PairingScheduler;
pub use rules::Position;
pub use sink::{GameLink, MemorySink, ResultSink};
pub use tournament::{RoundOutcome, RoundReport, TournamentRunner};
pub use uci::UciAdapter;

#[cfg(test)]
mod testutil;

#[cfg(test)]
mod heuristics_tests;
#[cfg(test)]
mod rules_tests;
