//! Full matches driven through the public engine API.

use graze_sim::core::commands::MatchCommand;
use graze_sim::core::enums::{GameMode, MatchPhase};
use graze_sim::core::events::MatchEvent;
use graze_sim::{MatchEngine, SimConfig};

#[test]
fn test_idle_player_is_eventually_shot_down() {
    let mut engine = MatchEngine::new(SimConfig::default());
    engine.queue_command(MatchCommand::StartMatch {
        mode: GameMode::Normal,
    });

    let mut hits = 0;
    let mut game_over = None;
    for _ in 0..60 * 60 {
        let snap = engine.tick();
        for event in &snap.events {
            match event {
                MatchEvent::PlayerHit { .. } => hits += 1,
                MatchEvent::GameOver {
                    final_score,
                    final_time_ms,
                } => game_over = Some((*final_score, *final_time_ms)),
                _ => {}
            }
        }
        if snap.phase == MatchPhase::GameOver {
            break;
        }
    }

    let (_, final_time_ms) = game_over.expect("aimed fans should finish a stationary player");
    assert_eq!(hits, 3);
    assert!(final_time_ms > 0.0);
    assert_eq!(engine.phase(), MatchPhase::GameOver);
}

#[test]
fn test_snapshot_stats_track_engine() {
    let mut engine = MatchEngine::new(SimConfig::default());
    engine.queue_command(MatchCommand::StartMatch {
        mode: GameMode::Normal,
    });
    let mut snap = engine.tick();
    for _ in 0..200 {
        snap = engine.tick();
    }
    assert_eq!(snap.stats.elapsed_ms, snap.clock.elapsed_ms);
    assert_eq!(snap.stats.boss_phase, 1);
    assert_eq!(snap.stats.boss_health_percent, 100.0);
    assert_eq!(snap.stats.dash_cooldown_max_ms, 3000.0);
    assert_eq!(snap.projectiles.len(), engine.pool().active_count());
    assert!(!snap.boss.shielded);
}

#[test]
fn test_snapshot_serializes_for_host() {
    let mut engine = MatchEngine::new(SimConfig::default());
    engine.queue_command(MatchCommand::StartMatch {
        mode: GameMode::Endless,
    });
    let snap = engine.tick();
    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["mode"], "endless");
    assert_eq!(json["phase"], "Active");
    assert_eq!(json["wave"], 1);
}
