use super::*;
use uuid::Uuid;

fn table_with(names: &[&str]) -> (ScoreTable, Vec<PlayerId>) {
    let mut table = ScoreTable::new();
    let ids: Vec<PlayerId> = names.iter().map(|_| Uuid::new_v4()).collect();
    for (id, name) in ids.iter().zip(names) {
        table.register(*id, name);
    }
    (table, ids)
}

#[test]
fn test_register_starts_at_default_rating() {
    let (table, ids) = table_with(&["alpha"]);
    let standing = table.standing(&ids[0]).unwrap();
    assert_eq!(standing.rating, DEFAULT_RATING);
    assert_eq!(standing.points, 0.0);
    assert_eq!(standing.games_played, 0);
}

#[test]
fn test_reregister_is_noop() {
    let (mut table, ids) = table_with(&["alpha"]);
    table.award_bye(&ids[0]);
    table.register(ids[0], "alpha-renamed");

    let standing = table.standing(&ids[0]).unwrap();
    assert_eq!(standing.name, "alpha");
    assert_eq!(standing.points, 1.0);
    assert_eq!(table.len(), 1);
}

#[test]
fn test_record_result_conserves_points() {
    let (mut table, ids) = table_with(&["alpha", "beta"]);
    table.record_result(&ids[0], &ids[1], Winner::White);
    table.record_result(&ids[0], &ids[1], Winner::Draw);

    let total: f64 = table.standings().iter().map(|s| s.points).sum();
    assert_eq!(total, 2.0);
    assert_eq!(table.standing(&ids[0]).unwrap().points, 1.5);
    assert_eq!(table.standing(&ids[1]).unwrap().points, 0.5);
    assert_eq!(table.standing(&ids[0]).unwrap().games_played, 2);
    assert_eq!(table.standing(&ids[1]).unwrap().games_played, 2);
}

#[test]
fn test_record_result_updates_elo_both_ways() {
    let (mut table, ids) = table_with(&["alpha", "beta"]);
    table.record_result(&ids[0], &ids[1], Winner::White);
    assert_eq!(table.standing(&ids[0]).unwrap().rating, 1516);
    assert_eq!(table.standing(&ids[1]).unwrap().rating, 1484);
}

#[test]
fn test_bye_awards_point_without_game() {
    let (mut table, ids) = table_with(&["alpha"]);
    table.award_bye(&ids[0]);

    let standing = table.standing(&ids[0]).unwrap();
    assert_eq!(standing.points, 1.0);
    assert_eq!(standing.games_played, 0);
    assert_eq!(standing.rating, DEFAULT_RATING);
}

#[test]
fn test_standings_sorted_by_points_then_rating() {
    let (mut table, ids) = table_with(&["alpha", "beta", "gamma"]);
    // beta beats gamma, alpha draws nobody: beta leads on points,
    // alpha outranks gamma on rating at equal points
    table.record_result(&ids[1], &ids[2], Winner::White);

    let order: Vec<String> = table.standings().into_iter().map(|s| s.name).collect();
    assert_eq!(order, vec!["beta", "alpha", "gamma"]);
}

#[test]
fn test_save_load_round_trip() {
    let (mut table, ids) = table_with(&["alpha", "beta"]);
    table.record_result(&ids[0], &ids[1], Winner::Black);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("standings.json");
    table.save(&path).unwrap();

    let loaded = ScoreTable::load(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    let standing = loaded.standing(&ids[1]).unwrap();
    assert_eq!(standing.points, 1.0);
    assert_eq!(standing.rating, 1516);
}
