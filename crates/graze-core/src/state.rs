//! Frame snapshot: the complete visible state published after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{BossPhase, GameMode, MatchPhase, Tint};
use crate::events::MatchEvent;
use crate::types::{MatchClock, Vec2};

/// Complete match state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub clock: MatchClock,
    pub phase: MatchPhase,
    pub mode: GameMode,
    pub wave: u32,
    pub stats: MatchStats,
    pub player: PlayerView,
    pub boss: BossView,
    pub projectiles: Vec<ProjectileView>,
    pub slow_zones: Vec<ZoneView>,
    pub warnings: Vec<ZoneView>,
    pub events: Vec<MatchEvent>,
}

/// HUD statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStats {
    pub score: u64,
    pub graze_count: u32,
    pub elapsed_ms: f32,
    pub player_health: u32,
    /// Boss health as 0..=100.
    pub boss_health_percent: f32,
    pub boss_phase: u8,
    pub dash_cooldown_remaining_ms: f32,
    pub dash_cooldown_max_ms: f32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub health: u32,
    pub dashing: bool,
    pub invincible: bool,
    pub slowed: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BossView {
    pub position: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub phase: BossPhase,
    pub shielded: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
    pub tint: Tint,
    pub fake: bool,
    /// Armed delayed-explode projectile (renderer flashes it).
    pub armed: bool,
}

/// A circular hazard or telegraph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZoneView {
    pub center: Vec2,
    pub radius: f32,
    pub remaining_ms: f32,
    /// True during the final fade window.
    pub fading: bool,
}
