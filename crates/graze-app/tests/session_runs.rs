use graze_app::autopilot::DodgePilot;
use graze_app::session::{run_headless, run_realtime};
use graze_core::enums::{GameMode, MatchPhase};
use graze_leaderboard::{JsonFileStore, Leaderboard};
use graze_sim::SimConfig;
use tempfile::TempDir;

fn config(seed: u64) -> SimConfig {
    SimConfig {
        seed,
        ..SimConfig::default()
    }
}

#[test]
fn test_headless_run_stops_at_time_limit() {
    let mut pilot = DodgePilot::new();
    let summary = run_headless(config(7), GameMode::Normal, 3000.0, &mut pilot);

    assert_eq!(summary.mode, GameMode::Normal);
    assert!(summary.wave >= 1);
    assert!(summary.time_ms < 3100);
    if summary.outcome == MatchPhase::Active {
        assert!(summary.time_ms >= 3000);
    }
}

#[test]
fn test_zero_limit_stops_after_first_tick() {
    let mut pilot = DodgePilot::new();
    let summary = run_headless(config(7), GameMode::Endless, 0.0, &mut pilot);
    assert_eq!(summary.ticks, 1);
    assert_eq!(summary.mode, GameMode::Endless);
    assert_eq!(summary.outcome, MatchPhase::Active);
}

#[test]
fn test_headless_runs_are_reproducible() {
    let a = run_headless(config(99), GameMode::Endless, 20_000.0, &mut DodgePilot::new());
    let b = run_headless(config(99), GameMode::Endless, 20_000.0, &mut DodgePilot::new());
    assert_eq!(a, b);
}

#[test]
fn test_summary_submits_to_leaderboard() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("board.json");
    let summary = run_headless(config(3), GameMode::Normal, 5000.0, &mut DodgePilot::new());

    let mut board = Leaderboard::new(JsonFileStore::open(&path).unwrap());
    assert!(board.submit_score(&summary.submission("Ace")));

    let reloaded = Leaderboard::new(JsonFileStore::open(&path).unwrap());
    let rows = reloaded.fetch_leaderboard(GameMode::Normal, None);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].player_name, "ace");
    assert_eq!(rows[0].score, summary.score);
    assert_eq!(rows[0].time_ms, summary.time_ms);
}

#[test]
fn test_realtime_run_reaches_short_limit() {
    let mut pilot = DodgePilot::new();
    let summary = run_realtime(config(5), GameMode::Normal, 500.0, &mut pilot).unwrap();
    assert_eq!(summary.outcome, MatchPhase::Active);
    assert!(summary.time_ms >= 500);
}
