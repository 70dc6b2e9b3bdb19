//! Shared data model for games, rounds, tournaments and engine rows

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Stable identifier for a roster player
pub type PlayerId = Uuid;

/// Which side won a game, or neither
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    White,
    Black,
    Draw,
}

impl Winner {
    /// Score from White's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn white_score(self) -> f64 {
        match self {
            Winner::White => 1.0,
            Winner::Black => 0.0,
            Winner::Draw => 0.5,
        }
    }

    /// Score from Black's perspective
    pub fn black_score(self) -> f64 {
        1.0 - self.white_score()
    }

    /// PGN result token
    pub fn result_token(self) -> &'static str {
        match self {
            Winner::White => "1-0",
            Winner::Black => "0-1",
            Winner::Draw => "1/2-1/2",
        }
    }
}

impl From<cozy_chess::Color> for Winner {
    fn from(color: cozy_chess::Color) -> Self {
        match color {
            cozy_chess::Color::White => Winner::White,
            cozy_chess::Color::Black => Winner::Black,
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeReason {
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    FiftyMoves,
    SeventyFiveMoves,
    Repetition,
    /// Rules engine rejected the proposed move; the proposer forfeits
    IllegalMove,
    /// Adapter failed, or returned no move while legal moves existed
    AdapterFault,
    /// Ply budget exhausted without a terminal position
    MoveLimit,
}

impl OutcomeReason {
    /// Forfeit reasons award the full point to the opponent of the
    /// faulting side rather than reflecting a board verdict.
    pub fn is_forfeit(self) -> bool {
        matches!(self, OutcomeReason::IllegalMove | OutcomeReason::AdapterFault)
    }
}

/// Final classification of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: Winner,
    pub reason: OutcomeReason,
}

/// One seat in a game record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub id: PlayerId,
    pub name: String,
}

/// Immutable record of one finished game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: Uuid,
    pub white: Seat,
    pub black: Seat,
    /// Moves actually applied to the board, in UCI notation
    pub moves: Vec<String>,
    pub outcome: GameOutcome,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub pgn: String,
}

/// One scheduled game of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub white: PlayerId,
    pub black: PlayerId,
}

/// Output of the pairing scheduler for one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundPairings {
    pub pairings: Vec<Pairing>,
    /// Odd roster: the unpaired player, awarded a full point
    pub bye: Option<PlayerId>,
}

/// Lifecycle status persisted for a tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TournamentStatus {
    Planned,
    Ongoing,
    Completed,
}

/// Metadata handed to the sink when a tournament starts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentMeta {
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub rounds: u32,
    pub status: TournamentStatus,
    pub players: Vec<String>,
}

/// Engine row as stored by the persistence layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineDescriptor {
    pub id: Uuid,
    pub name: String,
    pub version: Option<String>,
    /// Executable path for subprocess engines
    pub path: Option<String>,
    /// UCI options applied at startup
    #[serde(default)]
    pub options: HashMap<String, String>,
}

impl EngineDescriptor {
    /// Name shown in standings and logs; includes the version tag
    pub fn display_name(&self) -> String {
        match &self.version {
            Some(version) => format!("{}:{}", self.name, version),
            None => self.name.clone(),
        }
    }
}
