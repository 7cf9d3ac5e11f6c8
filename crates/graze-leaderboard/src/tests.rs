use graze_core::enums::GameMode;
use tempfile::TempDir;

use super::*;

fn run(name: &str, mode: GameMode, score: u64, wave: u32) -> ScoreSubmission {
    ScoreSubmission {
        player_name: name.into(),
        mode,
        score,
        graze_count: 12,
        wave,
        time_ms: 60_000,
    }
}

fn board() -> Leaderboard<MemoryStore> {
    Leaderboard::new(MemoryStore::new())
}

#[test]
fn test_submit_lowercases_name() {
    let mut lb = board();
    assert!(lb.submit_score(&run("  Neo ", GameMode::Normal, 100, 1)));
    let rows = lb.fetch_leaderboard(GameMode::Normal, None);
    assert_eq!(rows[0].player_name, "neo");
}

#[test]
fn test_empty_name_is_rejected() {
    let mut lb = board();
    assert!(!lb.submit_score(&run("   ", GameMode::Normal, 100, 1)));
    assert!(matches!(
        lb.try_submit(&run("", GameMode::Normal, 1, 1)),
        Err(LeaderboardError::EmptyName)
    ));
    assert!(lb.store().is_empty());
}

#[test]
fn test_resubmission_overwrites_row() {
    let mut lb = board();
    let first = lb.try_submit(&run("Trin", GameMode::Normal, 900, 3)).unwrap();
    let second = lb.try_submit(&run("TRIN", GameMode::Normal, 200, 1)).unwrap();

    assert_eq!(first.id, second.id);
    assert!(second.created_at >= first.created_at);
    assert_eq!(lb.store().len(), 1);
    // Latest result wins even when it is worse.
    assert_eq!(lb.fetch_leaderboard(GameMode::Normal, None)[0].score, 200);
}

#[test]
fn test_modes_are_separate_rows() {
    let mut lb = board();
    lb.submit_score(&run("neo", GameMode::Normal, 100, 1));
    lb.submit_score(&run("neo", GameMode::Endless, 50, 7));
    assert_eq!(lb.store().len(), 2);
    assert_eq!(lb.fetch_leaderboard(GameMode::Endless, None).len(), 1);
}

#[test]
fn test_top_ten_descending_by_default_field() {
    let mut lb = board();
    for i in 0..15u64 {
        lb.submit_score(&run(&format!("p{i}"), GameMode::Normal, i * 100, 1));
    }
    let rows = lb.fetch_leaderboard(GameMode::Normal, None);
    assert_eq!(rows.len(), LEADERBOARD_SIZE);
    assert_eq!(rows[0].score, 1400);
    assert!(rows.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_endless_defaults_to_wave_order() {
    let mut lb = board();
    lb.submit_score(&run("high-score", GameMode::Endless, 99_999, 2));
    lb.submit_score(&run("deep-run", GameMode::Endless, 10, 9));
    let rows = lb.fetch_leaderboard(GameMode::Endless, None);
    assert_eq!(rows[0].player_name, "deep-run");

    let by_score = lb.fetch_leaderboard(GameMode::Endless, Some(SortField::Score));
    assert_eq!(by_score[0].player_name, "high-score");
}

#[test]
fn test_sort_field_parse_and_default() {
    assert_eq!(SortField::parse("graze_count"), Some(SortField::GrazeCount));
    assert_eq!(SortField::parse("bogus"), None);
    assert_eq!(SortField::default_for(GameMode::Normal), SortField::Score);
    assert_eq!(SortField::default_for(GameMode::Endless), SortField::Wave);
}

#[test]
fn test_rank_preview_neighbours() {
    let mut lb = board();
    for (name, score) in [("a", 500), ("b", 400), ("c", 300), ("d", 200), ("e", 100)] {
        lb.submit_score(&run(name, GameMode::Normal, score, 1));
    }

    let preview = lb.fetch_rank_preview(GameMode::Normal, 250, 1).unwrap();
    assert_eq!(preview.rank, 4);
    let above: Vec<&str> = preview.above.iter().map(|e| e.player_name.as_str()).collect();
    let below: Vec<&str> = preview.below.iter().map(|e| e.player_name.as_str()).collect();
    assert_eq!(above, vec!["b", "c"]);
    assert_eq!(below, vec!["d", "e"]);
}

#[test]
fn test_rank_preview_edges() {
    let mut lb = board();
    assert_eq!(lb.fetch_rank_preview(GameMode::Normal, 10, 1).unwrap().rank, 1);

    lb.submit_score(&run("a", GameMode::Normal, 500, 1));
    lb.submit_score(&run("b", GameMode::Normal, 400, 1));

    let top = lb.fetch_rank_preview(GameMode::Normal, 9999, 1).unwrap();
    assert_eq!(top.rank, 1);
    assert!(top.above.is_empty());
    assert_eq!(top.below.len(), 2);

    let last = lb.fetch_rank_preview(GameMode::Normal, 0, 1).unwrap();
    assert_eq!(last.rank, 3);
    assert_eq!(last.above.len(), 2);
    assert!(last.below.is_empty());

    // Ties rank ahead of the existing row.
    assert_eq!(lb.fetch_rank_preview(GameMode::Normal, 400, 1).unwrap().rank, 2);
}

#[test]
fn test_endless_rank_uses_wave_then_score() {
    let mut lb = board();
    lb.submit_score(&run("a", GameMode::Endless, 100, 5));
    lb.submit_score(&run("b", GameMode::Endless, 9000, 4));
    lb.submit_score(&run("c", GameMode::Endless, 50, 5));

    // Wave 5 with score 75 sits between a and c.
    let preview = lb.fetch_rank_preview(GameMode::Endless, 75, 5).unwrap();
    assert_eq!(preview.rank, 2);
    assert_eq!(preview.above[0].player_name, "a");
    assert_eq!(preview.below[0].player_name, "c");
    assert_eq!(preview.below[1].player_name, "b");
}

#[test]
fn test_json_store_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("leaderboard.json");

    {
        let mut lb = Leaderboard::new(JsonFileStore::open(&path).unwrap());
        assert!(lb.submit_score(&run("Neo", GameMode::Normal, 1234, 3)));
        assert!(lb.submit_score(&run("neo", GameMode::Normal, 4321, 3)));
        assert!(lb.submit_score(&run("smith", GameMode::Endless, 10, 6)));
    }

    let lb = Leaderboard::new(JsonFileStore::open(&path).unwrap());
    assert_eq!(lb.store().len(), 2);
    let normal = lb.fetch_leaderboard(GameMode::Normal, None);
    assert_eq!(normal.len(), 1);
    assert_eq!(normal[0].score, 4321);

    // Ids keep counting after a reload.
    let mut lb = lb;
    let entry = lb.try_submit(&run("morpheus", GameMode::Normal, 1, 1)).unwrap();
    assert_eq!(entry.id, 2);
}

#[test]
fn test_json_store_missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(&dir.path().join("absent.json")).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_json_store_rejects_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        JsonFileStore::open(&path),
        Err(LeaderboardError::Serialize(_))
    ));
}
