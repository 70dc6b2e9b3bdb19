//! Tournament lifecycle: pair, play, score, persist, repeat

use std::collections::HashSet;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use arena_core::{
    ConfigError, GameRecord, PlayerId, PlayerStanding, ScoreTable, TournamentError,
    TournamentMeta, TournamentStatus,
};

use crate::adapter::Contestant;
use crate::config::TournamentConfig;
use crate::game::GameOrchestrator;
use crate::pairing::PairingScheduler;
use crate::sink::ResultSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Created,
    Running,
    Completed,
}

/// Whether the tournament continues after a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    MoreRounds,
    Completed,
}

/// What one `advance_round` call produced
#[derive(Debug)]
pub struct RoundReport {
    pub round: u32,
    pub games: Vec<GameRecord>,
    pub bye: Option<PlayerId>,
    /// Persistence faults; in-memory standings stay authoritative
    pub warnings: Vec<String>,
    pub outcome: RoundOutcome,
}

/// Owns the roster, the score table and the round loop.
///
/// Rounds are caller-stepped: `start` plays the first round, then the
/// caller drives `advance_round` until the report says `Completed`.
pub struct TournamentRunner<S: ResultSink> {
    config: TournamentConfig,
    roster: Vec<Contestant>,
    sink: S,
    table: ScoreTable,
    orchestrator: GameOrchestrator,
    phase: Phase,
    round: u32,
    tournament_id: Option<Uuid>,
}

impl<S: ResultSink> TournamentRunner<S> {
    /// Validate the roster and configuration up front
    pub fn new(
        config: TournamentConfig,
        roster: Vec<Contestant>,
        sink: S,
    ) -> Result<Self, ConfigError> {
        if roster.len() < 2 {
            return Err(ConfigError::NotEnoughPlayers(roster.len()));
        }
        if config.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        let mut names = HashSet::new();
        for contestant in &roster {
            if !names.insert(contestant.name.clone()) {
                return Err(ConfigError::DuplicateName(contestant.name.clone()));
            }
        }

        let mut table = ScoreTable::new();
        for contestant in &roster {
            table.register(contestant.id, &contestant.name);
        }
        let orchestrator = GameOrchestrator::new(config.max_plies);
        Ok(Self {
            config,
            roster,
            sink,
            table,
            orchestrator,
            phase: Phase::Created,
            round: 0,
            tournament_id: None,
        })
    }

    pub fn current_round(&self) -> u32 {
        self.round
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    pub fn standings(&self) -> Vec<PlayerStanding> {
        self.table.standings()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Persist the tournament metadata, transition to Running and play
    /// the first round
    pub async fn start(&mut self) -> Result<RoundReport, TournamentError> {
        if self.phase != Phase::Created {
            return Err(TournamentError::AlreadyStarted);
        }

        let meta = TournamentMeta {
            name: self.config.name.clone(),
            started_at: Utc::now(),
            finished_at: None,
            rounds: self.config.rounds,
            status: TournamentStatus::Ongoing,
            players: self.roster.iter().map(|c| c.name.clone()).collect(),
        };
        let mut warnings = Vec::new();
        match self.sink.save_tournament(&meta).await {
            Ok(id) => self.tournament_id = Some(id),
            Err(error) => {
                warn!(%error, "failed to persist tournament metadata");
                warnings.push(format!("failed to persist tournament metadata: {error}"));
            }
        }

        self.phase = Phase::Running;
        info!(name = %self.config.name, rounds = self.config.rounds, "tournament started");

        let mut report = self.advance_round().await?;
        warnings.append(&mut report.warnings);
        report.warnings = warnings;
        Ok(report)
    }

    /// Play the next round, or finish if the round budget is spent
    pub async fn advance_round(&mut self) -> Result<RoundReport, TournamentError> {
        if self.phase != Phase::Running {
            return Err(TournamentError::NotRunning);
        }
        let mut warnings = Vec::new();

        if self.round >= self.config.rounds || self.roster.len() < 2 {
            self.finish(&mut warnings).await;
            return Ok(RoundReport {
                round: self.round,
                games: Vec::new(),
                bye: None,
                warnings,
                outcome: RoundOutcome::Completed,
            });
        }

        self.round += 1;
        info!(round = self.round, "round start");
        let pairings = PairingScheduler::next_round(&self.table);

        if let Some(bye) = pairings.bye {
            self.table.award_bye(&bye);
            if let Some(standing) = self.table.standing(&bye) {
                info!(player = %standing.name, "bye");
            }
        }

        let mut games = Vec::new();
        for pairing in &pairings.pairings {
            let (white_idx, black_idx) =
                match (self.index_of(pairing.white), self.index_of(pairing.black)) {
                    (Some(white), Some(black)) => (white, black),
                    // the scheduler only emits registered players
                    _ => continue,
                };
            let (white, black) = pair_mut(&mut self.roster, white_idx, black_idx);
            let record = self.orchestrator.run(white, black).await;

            self.table
                .record_result(&pairing.white, &pairing.black, record.outcome.winner);
            self.persist_game(&record, &mut warnings).await;
            games.push(record);
        }

        if let Some(tournament_id) = self.tournament_id {
            if let Err(error) = self
                .sink
                .update_tournament_status(tournament_id, TournamentStatus::Ongoing, None)
                .await
            {
                warn!(%error, "failed to persist round status");
                warnings.push(format!("failed to persist round status: {error}"));
            }
        }

        let outcome = if self.round >= self.config.rounds {
            self.finish(&mut warnings).await;
            RoundOutcome::Completed
        } else {
            RoundOutcome::MoreRounds
        };
        Ok(RoundReport {
            round: self.round,
            games,
            bye: pairings.bye,
            warnings,
            outcome,
        })
    }

    /// Stop between rounds: persist the final state and release the
    /// roster's adapters
    pub async fn cancel(&mut self) -> Result<(), TournamentError> {
        if self.phase != Phase::Running {
            return Err(TournamentError::NotRunning);
        }
        let mut warnings = Vec::new();
        self.finish(&mut warnings).await;
        Ok(())
    }

    async fn persist_game(&self, record: &GameRecord, warnings: &mut Vec<String>) {
        let game_id = match self.sink.save_game(record, self.tournament_id).await {
            Ok(id) => Some(id),
            Err(error) => {
                warn!(%error, "failed to persist game");
                warnings.push(format!("failed to persist game: {error}"));
                None
            }
        };
        if let (Some(tournament_id), Some(game_id)) = (self.tournament_id, game_id) {
            if let Err(error) = self
                .sink
                .save_tournament_game_result(
                    tournament_id,
                    game_id,
                    self.round,
                    &record.white.name,
                    &record.black.name,
                    record.outcome.winner,
                )
                .await
            {
                warn!(%error, "failed to persist game result link");
                warnings.push(format!("failed to persist game result link: {error}"));
            }
        }
    }

    async fn finish(&mut self, warnings: &mut Vec<String>) {
        if let Some(tournament_id) = self.tournament_id {
            if let Err(error) = self
                .sink
                .update_tournament_status(
                    tournament_id,
                    TournamentStatus::Completed,
                    Some(Utc::now()),
                )
                .await
            {
                warn!(%error, "failed to persist final status");
                warnings.push(format!("failed to persist final status: {error}"));
            }
        }
        self.release_roster().await;
        self.phase = Phase::Completed;
        info!(name = %self.config.name, "tournament completed");
    }

    /// Teardown failures are logged, never propagated
    async fn release_roster(&mut self) {
        for contestant in &mut self.roster {
            if let Err(error) = contestant.adapter.shutdown().await {
                warn!(player = %contestant.name, %error, "adapter shutdown failed");
            }
        }
    }

    fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.roster.iter().position(|c| c.id == id)
    }
}

fn pair_mut(roster: &mut [Contestant], a: usize, b: usize) -> (&mut Contestant, &mut Contestant) {
    if a < b {
        let (left, right) = roster.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = roster.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
