//! Score table: points, games played and Elo ratings per player

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::elo::{self, DEFAULT_RATING, K_FACTOR};
use crate::error::StandingsError;
use crate::model::{PlayerId, Winner};

/// Standing of one player within a tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub id: PlayerId,
    pub name: String,
    pub points: f64,
    pub games_played: u32,
    pub rating: i32,
}

/// Points and ratings for every registered player.
///
/// Owned by the tournament runner; readers get cloned snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreTable {
    players: HashMap<PlayerId, PlayerStanding>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self {
            players: HashMap::new(),
        }
    }

    /// Load a table from a JSON file
    pub fn load(path: &Path) -> Result<Self, StandingsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save the table to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), StandingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Register a player at the default rating
    pub fn register(&mut self, id: PlayerId, name: &str) {
        self.register_rated(id, name, DEFAULT_RATING);
    }

    /// Register a player with a rating carried over from persistence.
    /// Re-registering an existing id is a no-op.
    pub fn register_rated(&mut self, id: PlayerId, name: &str, rating: i32) {
        self.players.entry(id).or_insert_with(|| PlayerStanding {
            id,
            name: name.to_string(),
            points: 0.0,
            games_played: 0,
            rating,
        });
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn standing(&self, id: &PlayerId) -> Option<&PlayerStanding> {
        self.players.get(id)
    }

    /// Full point for the unpaired player. Byes leave games_played and
    /// ratings untouched.
    pub fn award_bye(&mut self, id: &PlayerId) {
        if let Some(standing) = self.players.get_mut(id) {
            standing.points += 1.0;
        }
    }

    /// Apply a finished game to both seats: points, games played and
    /// Elo ratings. Unknown ids are ignored.
    pub fn record_result(&mut self, white: &PlayerId, black: &PlayerId, winner: Winner) {
        let (Some(w), Some(b)) = (self.players.get(white), self.players.get(black)) else {
            return;
        };
        let (new_white, new_black) =
            elo::apply_game(w.rating, b.rating, winner.white_score(), K_FACTOR);

        if let Some(standing) = self.players.get_mut(white) {
            standing.points += winner.white_score();
            standing.games_played += 1;
            standing.rating = new_white;
        }
        if let Some(standing) = self.players.get_mut(black) {
            standing.points += winner.black_score();
            standing.games_played += 1;
            standing.rating = new_black;
        }
    }

    /// Snapshot sorted for display: points descending, rating breaks ties
    pub fn standings(&self) -> Vec<PlayerStanding> {
        let mut entries: Vec<_> = self.players.values().cloned().collect();
        entries.sort_by(|a, b| {
            b.points
                .partial_cmp(&a.points)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.rating.cmp(&a.rating))
        });
        entries
    }

    /// Fixed-width leaderboard text
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("\n=== Leaderboard ===\n");
        out.push_str(&format!(
            "{:<30} {:>7} {:>7} {:>7}\n",
            "Player", "Points", "Elo", "Games"
        ));
        out.push_str(&format!("{}\n", "-".repeat(54)));
        for standing in self.standings() {
            out.push_str(&format!(
                "{:<30} {:>7.1} {:>7} {:>7}\n",
                standing.name, standing.points, standing.rating, standing.games_played
            ));
        }
        out
    }
}
