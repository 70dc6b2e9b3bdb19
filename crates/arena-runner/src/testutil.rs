//! Scripted adapters shared by the orchestration tests

use async_trait::async_trait;
use cozy_chess::Move;

use arena_core::AdapterError;

use crate::adapter::{Contestant, PlayerAdapter};
use crate::rules::Position;

/// Plays a fixed move list, then declines
pub struct ScriptedAdapter {
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedAdapter {
    pub fn new(moves: &[&str]) -> Self {
        Self {
            moves: moves.iter().map(|m| m.parse().expect("test move")).collect(),
            next: 0,
        }
    }
}

#[async_trait]
impl PlayerAdapter for ScriptedAdapter {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn new_game(&mut self) -> Result<(), AdapterError> {
        self.next = 0;
        Ok(())
    }

    async fn propose_move(&mut self, _pos: &Position) -> Result<Option<Move>, AdapterError> {
        let mv = self.moves.get(self.next).copied();
        if mv.is_some() {
            self.next += 1;
        }
        Ok(mv)
    }

    async fn shutdown(&mut self) -> Result<(), AdapterError> {
        Ok(())
    }
}

pub fn scripted(name: &str, moves: &[&str]) -> Contestant {
    Contestant::new(name, Box::new(ScriptedAdapter::new(moves)))
}
