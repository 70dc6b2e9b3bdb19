use super::*;

use arena_core::{OutcomeReason, Winner};
use cozy_chess::{Move, Piece};

fn play_all(pos: &mut Position, moves: &[&str]) {
    for text in moves {
        let mv: Move = text.parse().unwrap();
        pos.play(mv).unwrap();
    }
}

#[test]
fn test_startpos_has_twenty_moves() {
    let pos = Position::new();
    assert_eq!(pos.legal_moves().len(), 20);
    assert!(pos.has_legal_moves());
    assert!(pos.verdict().is_none());
}

#[test]
fn test_history_and_ply_count() {
    let mut pos = Position::new();
    play_all(&mut pos, &["e2e4", "e7e5"]);
    assert_eq!(pos.uci_history(), ["e2e4", "e7e5"]);
    assert_eq!(pos.plies(), 2);
}

#[test]
fn test_illegal_move_rejected_and_not_recorded() {
    let mut pos = Position::new();
    assert!(pos.play("e2e5".parse().unwrap()).is_err());
    assert!(pos.uci_history().is_empty());
}

#[test]
fn test_fools_mate_is_checkmate() {
    let mut pos = Position::new();
    play_all(&mut pos, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    let verdict = pos.verdict().unwrap();
    assert_eq!(verdict.winner, Winner::Black);
    assert_eq!(verdict.reason, OutcomeReason::Checkmate);
}

#[test]
fn test_stalemate_classification() {
    let pos = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    let verdict = pos.verdict().unwrap();
    assert_eq!(verdict.winner, Winner::Draw);
    assert_eq!(verdict.reason, OutcomeReason::Stalemate);
}

#[test]
fn test_threefold_repetition() {
    let mut pos = Position::new();
    play_all(
        &mut pos,
        &["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6", "f3g1", "f6g8"],
    );
    let verdict = pos.verdict().unwrap();
    assert_eq!(verdict.winner, Winner::Draw);
    assert_eq!(verdict.reason, OutcomeReason::Repetition);
}

#[test]
fn test_fifty_move_rule() {
    let pos = Position::from_fen("8/8/8/8/8/4k3/8/4K2R w K - 100 60").unwrap();
    let verdict = pos.verdict().unwrap();
    assert_eq!(verdict.winner, Winner::Draw);
    assert_eq!(verdict.reason, OutcomeReason::FiftyMoves);
}

#[test]
fn test_insufficient_material_king_vs_king() {
    let pos = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1").unwrap();
    let verdict = pos.verdict().unwrap();
    assert_eq!(verdict.reason, OutcomeReason::InsufficientMaterial);
}

#[test]
fn test_king_and_minor_is_insufficient() {
    let pos = Position::from_fen("8/8/8/4k3/8/4KB2/8/8 w - - 0 1").unwrap();
    let verdict = pos.verdict().unwrap();
    assert_eq!(verdict.reason, OutcomeReason::InsufficientMaterial);
}

#[test]
fn test_rook_endgame_is_not_insufficient() {
    let pos = Position::from_fen("8/8/8/4k3/8/4KR2/8/8 w - - 0 1").unwrap();
    assert!(pos.verdict().is_none());
}

#[test]
fn test_en_passant_is_a_capture() {
    let mut pos = Position::new();
    play_all(&mut pos, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    let ep: Move = "e5d6".parse().unwrap();
    assert!(pos.legal_moves().contains(&ep));
    assert!(pos.is_capture(ep));
    assert_eq!(pos.captured_piece(ep), Some(Piece::Pawn));
}

#[test]
fn test_castling_round_trips_through_standard_uci() {
    let mut pos = Position::new();
    play_all(&mut pos, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "f8c5"]);
    let castle = pos.parse_uci("e1g1").unwrap();
    assert!(!pos.is_capture(castle));
    pos.play(castle).unwrap();
    assert_eq!(pos.uci_history().last().map(String::as_str), Some("e1g1"));
}

#[test]
fn test_pgn_export() {
    let mut pos = Position::new();
    play_all(&mut pos, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    let pgn = pos.pgn("alpha", "beta", "0-1");
    assert!(pgn.contains("[White \"alpha\"]"));
    assert!(pgn.contains("[Black \"beta\"]"));
    assert!(pgn.contains("[Result \"0-1\"]"));
    assert!(pgn.contains("1. f2f3 e7e5 2. g2g4 d8h4 0-1"));
}
