//! Thin wrapper over the external rules engine
//!
//! Owns a `cozy_chess::Board` plus the bookkeeping the engine leaves to
//! the caller: the move history in UCI notation, repetition counting
//! and a conservative insufficient-material check. Move generation and
//! legality stay inside `cozy_chess`.

use std::collections::HashMap;

use cozy_chess::{Board, Color, GameStatus, Move, Piece};

use arena_core::{GameOutcome, OutcomeReason, Winner};

/// Board state plus history for one game
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    initial_fen: Option<String>,
    history: Vec<String>,
    seen: HashMap<u64, u32>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard starting position
    pub fn new() -> Self {
        Self::with_board(Board::default(), None)
    }

    /// Arbitrary starting position
    pub fn from_fen(fen: &str) -> Result<Self, cozy_chess::FenParseError> {
        let board = Board::from_fen(fen, false)?;
        Ok(Self::with_board(board, Some(fen.to_string())))
    }

    fn with_board(board: Board, initial_fen: Option<String>) -> Self {
        let mut seen = HashMap::new();
        seen.insert(board.hash(), 1);
        Self {
            board,
            initial_fen,
            history: Vec::new(),
            seen,
        }
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// FEN of the starting position, if it was not the standard one
    pub fn initial_fen(&self) -> Option<&str> {
        self.initial_fen.as_deref()
    }

    pub fn fen(&self) -> String {
        format!("{}", self.board)
    }

    /// Moves applied so far, in UCI notation
    pub fn uci_history(&self) -> &[String] {
        &self.history
    }

    pub fn plies(&self) -> u32 {
        self.history.len() as u32
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        self.board.generate_moves(|batch| {
            moves.extend(batch);
            false
        });
        moves
    }

    pub fn has_legal_moves(&self) -> bool {
        self.board.generate_moves(|_| true)
    }

    /// Parse a move in UCI notation against the current position.
    /// Accepts the standard castling notation (`e1g1`) and converts it
    /// to the engine's king-takes-rook encoding.
    pub fn parse_uci(&self, text: &str) -> Option<Move> {
        cozy_chess::util::parse_uci_move(&self.board, text).ok()
    }

    /// Piece captured by `mv`, including en passant
    pub fn captured_piece(&self, mv: Move) -> Option<Piece> {
        if let Some(piece) = self.board.piece_on(mv.to) {
            // castling is encoded as king takes own rook
            if self.board.color_on(mv.to) == Some(self.board.side_to_move()) {
                return None;
            }
            Some(piece)
        } else if self.board.piece_on(mv.from) == Some(Piece::Pawn)
            && mv.from.file() != mv.to.file()
        {
            Some(Piece::Pawn)
        } else {
            None
        }
    }

    pub fn is_capture(&self, mv: Move) -> bool {
        self.captured_piece(mv).is_some()
    }

    /// Apply a move after the rules engine validates it. Records the
    /// UCI text and the repetition entry for the new position.
    pub fn play(&mut self, mv: Move) -> Result<(), cozy_chess::IllegalMoveError> {
        let uci = format!("{}", cozy_chess::util::display_uci_move(&self.board, mv));
        self.board.try_play(mv)?;
        self.history.push(uci);
        *self.seen.entry(self.board.hash()).or_insert(0) += 1;
        Ok(())
    }

    fn repetitions(&self) -> u32 {
        self.seen.get(&self.board.hash()).copied().unwrap_or(0)
    }

    /// Kings alone, or kings plus a single minor piece
    fn insufficient_material(&self) -> bool {
        let heavy = self.board.pieces(Piece::Pawn)
            | self.board.pieces(Piece::Rook)
            | self.board.pieces(Piece::Queen);
        heavy.is_empty() && self.board.occupied().len() <= 3
    }

    /// Terminal classification of the current position, if any.
    /// Threefold repetition and the fifty-move rule are applied
    /// automatically rather than left as claims.
    pub fn verdict(&self) -> Option<GameOutcome> {
        match self.board.status() {
            GameStatus::Won => Some(GameOutcome {
                winner: Winner::from(!self.board.side_to_move()),
                reason: OutcomeReason::Checkmate,
            }),
            GameStatus::Drawn => {
                let reason = if self.has_legal_moves() {
                    OutcomeReason::FiftyMoves
                } else {
                    OutcomeReason::Stalemate
                };
                Some(GameOutcome {
                    winner: Winner::Draw,
                    reason,
                })
            }
            GameStatus::Ongoing => {
                if self.repetitions() >= 3 {
                    Some(GameOutcome {
                        winner: Winner::Draw,
                        reason: OutcomeReason::Repetition,
                    })
                } else if self.insufficient_material() {
                    Some(GameOutcome {
                        winner: Winner::Draw,
                        reason: OutcomeReason::InsufficientMaterial,
                    })
                } else {
                    None
                }
            }
        }
    }

    /// PGN-style export with coordinate movetext
    pub fn pgn(&self, white: &str, black: &str, result: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("[White \"{}\"]\n", white));
        out.push_str(&format!("[Black \"{}\"]\n", black));
        out.push_str(&format!("[Result \"{}\"]\n\n", result));
        for (i, mv) in self.history.iter().enumerate() {
            if i % 2 == 0 {
                out.push_str(&format!("{}. ", i / 2 + 1));
            }
            out.push_str(mv);
            out.push(' ');
        }
        out.push_str(result);
        out.push('\n');
        out
    }
}
