//! Elo rating math
//!
//! Pure functions over integer ratings; the score table owns the state.

/// Default starting rating for new players
pub const DEFAULT_RATING: i32 = 1500;

/// K-factor for rating updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Expected score for a player rated `a` against one rated `b`
pub fn expected_score(a: i32, b: i32) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((f64::from(b) - f64::from(a)) / 400.0))
}

/// New rating after a game with the given actual and expected scores.
/// Rounds half away from zero.
pub fn updated_rating(current: i32, actual: f64, expected: f64, k: f64) -> i32 {
    current + (k * (actual - expected)).round() as i32
}

/// Apply one game to both ratings.
///
/// `score_a` is 1.0 / 0.5 / 0.0 from the first player's perspective;
/// the opponent receives the complement.
pub fn apply_game(rating_a: i32, rating_b: i32, score_a: f64, k: f64) -> (i32, i32) {
    let expected_a = expected_score(rating_a, rating_b);
    let expected_b = expected_score(rating_b, rating_a);
    let new_a = updated_rating(rating_a, score_a, expected_a, k);
    let new_b = updated_rating(rating_b, 1.0 - score_a, expected_b, k);
    (new_a, new_b)
}
