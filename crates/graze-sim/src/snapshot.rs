//! Snapshot building: reads engine state into a `FrameSnapshot`.
//!
//! Read-only; never modifies the match.

use graze_core::enums::{GameMode, MatchPhase};
use graze_core::events::MatchEvent;
use graze_core::state::*;
use graze_core::types::MatchClock;

use crate::boss::{Boss, Hazard};
use crate::player::Player;
use crate::pool::ProjectilePool;

/// Borrowed engine state needed to build a snapshot.
pub struct SnapshotSource<'a> {
    pub clock: MatchClock,
    pub phase: MatchPhase,
    pub mode: GameMode,
    pub wave: u32,
    pub score: u64,
    pub graze_count: u32,
    pub player: &'a Player,
    pub boss: &'a Boss,
    pub pool: &'a ProjectilePool,
}

pub fn build_snapshot(src: SnapshotSource<'_>, events: Vec<MatchEvent>) -> FrameSnapshot {
    let SnapshotSource {
        clock,
        phase,
        mode,
        wave,
        score,
        graze_count,
        player,
        boss,
        pool,
    } = src;

    FrameSnapshot {
        clock,
        phase,
        mode,
        wave,
        stats: MatchStats {
            score,
            graze_count,
            elapsed_ms: clock.elapsed_ms,
            player_health: player.health(),
            boss_health_percent: boss.health_percent(),
            boss_phase: boss.phase().number(),
            dash_cooldown_remaining_ms: player.dash_cooldown_remaining_ms(),
            dash_cooldown_max_ms: player.dash_cooldown_max_ms(),
        },
        player: PlayerView {
            position: player.position,
            health: player.health(),
            dashing: player.is_dashing(),
            invincible: player.is_invincible(),
            slowed: player.slowed,
        },
        boss: BossView {
            position: boss.position(),
            health: boss.health(),
            max_health: boss.max_health(),
            phase: boss.phase(),
            shielded: boss.is_shielded(),
        },
        projectiles: pool
            .iter_active()
            .map(|(_, p)| ProjectileView {
                position: p.position,
                tint: p.tint,
                fake: p.fake,
                armed: p.is_armed(),
            })
            .collect(),
        slow_zones: boss.slow_zones().iter().map(|z| zone_view(z, true)).collect(),
        warnings: boss.warnings().iter().map(|z| zone_view(z, false)).collect(),
        events,
    }
}

fn zone_view(hazard: &Hazard, fades: bool) -> ZoneView {
    ZoneView {
        center: hazard.area.center,
        radius: hazard.area.radius,
        remaining_ms: hazard.remaining_ms,
        fading: fades && hazard.is_fading(),
    }
}
