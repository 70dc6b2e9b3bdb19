//! In-process heuristic players

use async_trait::async_trait;
use cozy_chess::{Move, Piece};
use rand::seq::SliceRandom;

use arena_core::AdapterError;

use crate::adapter::PlayerAdapter;
use crate::rules::Position;

/// Centipawn value of a captured piece
pub(crate) fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight => 300,
        Piece::Bishop => 300,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 0,
    }
}

/// Plays a uniformly random legal move
#[derive(Debug, Default)]
pub struct RandomAdapter;

#[async_trait]
impl PlayerAdapter for RandomAdapter {
    fn name(&self) -> &str {
        "random"
    }

    async fn new_game(&mut self) -> Result<(), AdapterError> {
        Ok(())
    }

    async fn propose_move(&mut self, pos: &Position) -> Result<Option<Move>, AdapterError> {
        let moves = pos.legal_moves();
        Ok(moves.choose(&mut rand::thread_rng()).copied())
    }

    async fn shutdown(&mut self) -> Result<(), AdapterError> {
        Ok(())
    }
}

/// Prefers captures; otherwise plays a random legal move
#[derive(Debug, Default)]
pub struct CaptureAdapter;

#[async_trait]
impl PlayerAdapter for CaptureAdapter {
    fn name(&self) -> &str {
        "capture"
    }

    async fn new_game(&mut self) -> Result<(), AdapterError> {
        Ok(())
    }

    async fn propose_move(&mut self, pos: &Position) -> Result<Option<Move>, AdapterError> {
        let moves = pos.legal_moves();
        let captures: Vec<Move> = moves
            .iter()
            .copied()
            .filter(|&mv| pos.is_capture(mv))
            .collect();
        let pool = if captures.is_empty() { &moves } else { &captures };
        Ok(pool.choose(&mut rand::thread_rng()).copied())
    }

    async fn shutdown(&mut self) -> Result<(), AdapterError> {
        Ok(())
    }
}

/// Takes the highest-value capture available; otherwise random
#[derive(Debug, Default)]
pub struct GreedyMaterialAdapter;

#[async_trait]
impl PlayerAdapter for GreedyMaterialAdapter {
    fn name(&self) -> &str {
        "greedy"
    }

    async fn new_game(&mut self) -> Result<(), AdapterError> {
        Ok(())
    }

    async fn propose_move(&mut self, pos: &Position) -> Result<Option<Move>, AdapterError> {
        let moves = pos.legal_moves();
        let mut rng = rand::thread_rng();

        let best_value = moves
            .iter()
            .filter_map(|&mv| pos.captured_piece(mv).map(piece_value))
            .max();
        if let Some(best_value) = best_value {
            let candidates: Vec<Move> = moves
                .iter()
                .copied()
                .filter(|&mv| pos.captured_piece(mv).map(piece_value) == Some(best_value))
                .collect();
            return Ok(candidates.choose(&mut rng).copied());
        }
        Ok(moves.choose(&mut rng).copied())
    }

    async fn shutdown(&mut self) -> Result<(), AdapterError> {
        Ok(())
    }
}
