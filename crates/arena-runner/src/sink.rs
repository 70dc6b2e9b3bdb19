//! Persistence contract consumed by the tournament runner

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use arena_core::{EngineDescriptor, GameRecord, TournamentMeta, TournamentStatus, Winner};

/// Where finished games and tournament state end up.
///
/// Implementations own their error types. The runner reports failures
/// as warnings and keeps its in-memory state authoritative.
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Persist a finished game, optionally linked to a tournament
    async fn save_game(
        &self,
        record: &GameRecord,
        tournament_id: Option<Uuid>,
    ) -> anyhow::Result<Uuid>;

    /// Persist tournament metadata, returning its id
    async fn save_tournament(&self, meta: &TournamentMeta) -> anyhow::Result<Uuid>;

    async fn update_tournament_status(
        &self,
        tournament_id: Uuid,
        status: TournamentStatus,
        finished_at: Option<DateTime<Utc>>,
    ) -> anyhow::Result<()>;

    /// Link a game into a tournament round with its result
    async fn save_tournament_game_result(
        &self,
        tournament_id: Uuid,
        game_id: Uuid,
        round: u32,
        white: &str,
        black: &str,
        winner: Winner,
    ) -> anyhow::Result<()>;

    /// Engine rows known to the store
    async fn get_all_engines(&self) -> anyhow::Result<Vec<EngineDescriptor>>;
}

/// Row linking a game into a tournament round
#[derive(Debug, Clone)]
pub struct GameLink {
    pub tournament_id: Uuid,
    pub game_id: Uuid,
    pub round: u32,
    pub white: String,
    pub black: String,
    pub winner: Winner,
}

#[derive(Debug, Default)]
struct MemoryState {
    games: Vec<(GameRecord, Option<Uuid>)>,
    tournaments: HashMap<Uuid, TournamentMeta>,
    links: Vec<GameLink>,
    engines: Vec<EngineDescriptor>,
}

/// In-memory sink backing tests and the CLI
#[derive(Debug, Default)]
pub struct MemorySink {
    state: Mutex<MemoryState>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an engine row, as the store admin would
    pub async fn add_engine(&self, descriptor: EngineDescriptor) {
        self.state.lock().await.engines.push(descriptor);
    }

    pub async fn saved_games(&self) -> Vec<GameRecord> {
        let state = self.state.lock().await;
        state.games.iter().map(|(record, _)| record.clone()).collect()
    }

    pub async fn tournaments(&self) -> Vec<TournamentMeta> {
        let state = self.state.lock().await;
        state.tournaments.values().cloned().collect()
    }

    pub async fn game_links(&self) -> Vec<GameLink> {
        self.state.lock().await.links.clone()
    }
}

#[async_trait]
impl ResultSink for MemorySink {
    async fn save_game(
        &self,
        record: &GameRecord,
        tournament_id: Option<Uuid>,
    ) -> anyhow::Result<Uuid> {
        let mut state = self.state.lock().await;
        state.games.push((record.clone(), tournament_id));
        Ok(record.id)
    }

    async fn save_tournament(&self, meta: &TournamentMeta) -> anyhow::Result<Uuid> {
        let id = Uuid::new_v4();
        self.state.lock().await.tournaments.insert(id, meta.clone());
        Ok(id)
    }

    async fn update_tournament_status(
        &self,
        tournament_id: Uuid,
        status: TournamentStatus,
        finished_at: Option<DateTime<Utc>>,
    ) -> anyhow::Result<()> {
        let mut state = self.state.lock().await;
        let meta = state
            .tournaments
            .get_mut(&tournament_id)
            .ok_or_else(|| anyhow::anyhow!("unknown tournament {tournament_id}"))?;
        meta.status = status;
        if finished_at.is_some() {
            meta.finished_at = finished_at;
        }
        Ok(())
    }

    async fn save_tournament_game_result(
        &self,
        tournament_id: Uuid,
        game_id: Uuid,
        round: u32,
        white: &str,
        black: &str,
        winner: Winner,
    ) -> anyhow::Result<()> {
        self.state.lock().await.links.push(GameLink {
            tournament_id,
            game_id,
            round,
            white: white.to_string(),
            black: black.to_string(),
            winner,
        });
        Ok(())
    }

    async fn get_all_engines(&self) -> anyhow::Result<Vec<EngineDescriptor>> {
        Ok(self.state.lock().await.engines.clone())
    }
}
