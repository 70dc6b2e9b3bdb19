//! Core data model for the engine arena
//!
//! This crate provides:
//! - The shared game and tournament data model
//! - Pure Elo rating math
//! - The score table tracking points, games and ratings
//! - The error taxonomy shared with the runner

mod elo;
mod error;
mod model;
mod standings;

pub use elo::*;
pub use error::*;
pub use model::*;
pub use standings::*;

#[cfg(test)]
mod standings_tests;
