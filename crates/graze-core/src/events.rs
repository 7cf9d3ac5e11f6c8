//! Events emitted by the simulation for UI, audio, and persistence feedback.

use serde::{Deserialize, Serialize};

use crate::enums::BossPhase;
use crate::types::Vec2;
use crate::upgrades::UpgradeKind;

/// Events produced during a tick, drained into the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// Boss crossed a health threshold and raised its phase shield.
    PhaseChanged { phase: BossPhase },
    /// Player took damage.
    PlayerHit { health: u32 },
    /// One or more grazes registered this tick.
    Grazed { count: u32, score: u64 },
    /// Near-miss slow motion started.
    SlowMotion,
    /// Player rammed the boss. `applied` is false while the shield is up.
    BossHit { applied: bool, boss_health: f32 },
    /// A delayed-explode projectile burst.
    ProjectileExploded { position: Vec2 },
    /// Boss health reached zero on the given wave.
    BossDefeated { wave: u32 },
    /// Player health reached zero.
    GameOver { final_score: u64, final_time_ms: f32 },
    /// An upgrade was applied between waves.
    UpgradeApplied { kind: UpgradeKind },
}
