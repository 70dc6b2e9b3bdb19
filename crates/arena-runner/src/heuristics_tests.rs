use super::*;

use cozy_chess::Piece;

use crate::heuristics::piece_value;

fn position_after(moves: &[&str]) -> Position {
    let mut pos = Position::new();
    for text in moves {
        pos.play(text.parse().unwrap()).unwrap();
    }
    pos
}

#[test]
fn test_piece_values_rank_material() {
    assert!(piece_value(Piece::Queen) > piece_value(Piece::Rook));
    assert!(piece_value(Piece::Rook) > piece_value(Piece::Bishop));
    assert!(piece_value(Piece::Knight) > piece_value(Piece::Pawn));
}

#[tokio::test]
async fn test_random_proposes_a_legal_move() {
    let pos = Position::new();
    let mut adapter = RandomAdapter;
    let mv = adapter.propose_move(&pos).await.unwrap().unwrap();
    assert!(pos.legal_moves().contains(&mv));
}

#[tokio::test]
async fn test_capture_adapter_takes_the_only_capture() {
    let pos = position_after(&["e2e4", "d7d5"]);
    let mut adapter = CaptureAdapter;
    for _ in 0..10 {
        let mv = adapter.propose_move(&pos).await.unwrap().unwrap();
        assert_eq!(mv.to_string(), "e4d5");
    }
}

#[tokio::test]
async fn test_greedy_takes_the_queen_over_the_pawn() {
    // knight on e5 can take the d7 queen or the f7 pawn
    let pos = Position::from_fen("k7/3q1p2/8/4N3/8/8/8/K7 w - - 0 1").unwrap();
    let mut adapter = GreedyMaterialAdapter;
    for _ in 0..10 {
        let mv = adapter.propose_move(&pos).await.unwrap().unwrap();
        assert_eq!(mv.to_string(), "e5d7");
    }
}

#[tokio::test]
async fn test_greedy_without_captures_stays_legal() {
    let pos = Position::new();
    let mut adapter = GreedyMaterialAdapter;
    let mv = adapter.propose_move(&pos).await.unwrap().unwrap();
    assert!(pos.legal_moves().contains(&mv));
}
