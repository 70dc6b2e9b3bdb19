//! Drives a single game between two contestants

use chrono::Utc;
use cozy_chess::Color;
use tracing::{debug, info, warn};
use uuid::Uuid;

use arena_core::{GameOutcome, GameRecord, OutcomeReason, Seat, Winner};

use crate::adapter::Contestant;
use crate::rules::Position;

/// Plays games to completion and produces their records.
///
/// Adapter faults and illegal moves resolve as forfeits here; they
/// never escape as errors.
#[derive(Debug, Clone, Copy)]
pub struct GameOrchestrator {
    max_plies: u32,
}

impl GameOrchestrator {
    pub fn new(max_plies: u32) -> Self {
        Self { max_plies }
    }

    /// Run one game from the starting position to a terminal outcome
    pub async fn run(&self, white: &mut Contestant, black: &mut Contestant) -> GameRecord {
        let started_at = Utc::now();
        let mut pos = Position::new();
        info!(white = %white.name, black = %black.name, "game start");

        let outcome = if let Err(error) = white.adapter.new_game().await {
            warn!(player = %white.name, %error, "game setup failed, forfeits");
            GameOutcome {
                winner: Winner::Black,
                reason: OutcomeReason::AdapterFault,
            }
        } else if let Err(error) = black.adapter.new_game().await {
            warn!(player = %black.name, %error, "game setup failed, forfeits");
            GameOutcome {
                winner: Winner::White,
                reason: OutcomeReason::AdapterFault,
            }
        } else {
            self.play_out(&mut pos, white, black).await
        };

        info!(
            white = %white.name,
            black = %black.name,
            result = outcome.winner.result_token(),
            reason = ?outcome.reason,
            plies = pos.plies(),
            "game over"
        );

        let finished_at = Utc::now();
        let pgn = pos.pgn(&white.name, &black.name, outcome.winner.result_token());
        GameRecord {
            id: Uuid::new_v4(),
            white: Seat {
                id: white.id,
                name: white.name.clone(),
            },
            black: Seat {
                id: black.id,
                name: black.name.clone(),
            },
            moves: pos.uci_history().to_vec(),
            outcome,
            started_at,
            finished_at,
            pgn,
        }
    }

    async fn play_out(
        &self,
        pos: &mut Position,
        white: &mut Contestant,
        black: &mut Contestant,
    ) -> GameOutcome {
        loop {
            if let Some(verdict) = pos.verdict() {
                return verdict;
            }
            if pos.plies() >= self.max_plies {
                return GameOutcome {
                    winner: Winner::Draw,
                    reason: OutcomeReason::MoveLimit,
                };
            }

            let side = pos.side_to_move();
            let mover = match side {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };

            match mover.adapter.propose_move(pos).await {
                Err(error) => {
                    warn!(player = %mover.name, %error, "adapter fault, forfeits");
                    return forfeit_against(side, OutcomeReason::AdapterFault);
                }
                // legal moves existed, the verdict check above ran first
                Ok(None) => {
                    warn!(player = %mover.name, "no move returned, forfeits");
                    return forfeit_against(side, OutcomeReason::AdapterFault);
                }
                Ok(Some(mv)) => {
                    if let Err(error) = pos.play(mv) {
                        warn!(player = %mover.name, %error, "illegal move, forfeits");
                        return forfeit_against(side, OutcomeReason::IllegalMove);
                    }
                    debug!(ply = pos.plies(), "move played");
                }
            }
        }
    }
}

/// Full point to the opponent of the faulting side
fn forfeit_against(side: Color, reason: OutcomeReason) -> GameOutcome {
    GameOutcome {
        winner: Winner::from(!side),
        reason,
    }
}
