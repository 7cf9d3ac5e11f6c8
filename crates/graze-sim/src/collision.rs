//! Collision resolver: player vs projectiles, player vs boss, graze sweep.
//!
//! Owns no state. It reads positions and calls the owners' entry points, then
//! reports what happened so the match can score, emit events and change phase.

use graze_core::constants::*;
use graze_core::events::MatchEvent;
use graze_core::upgrades::UpgradeState;

use crate::boss::{Boss, DamageOutcome};
use crate::player::Player;
use crate::pool::{ProjectileId, ProjectilePool};

/// What one collision pass did.
#[derive(Debug, Default)]
pub struct CollisionReport {
    pub score_gained: u64,
    pub grazes: u32,
    pub start_slow_motion: bool,
    pub player_died: bool,
    pub boss_defeated: bool,
    pub events: Vec<MatchEvent>,
}

pub fn resolve(
    player: &mut Player,
    boss: &mut Boss,
    pool: &mut ProjectilePool,
    upgrades: &UpgradeState,
    slow_motion_active: bool,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    projectile_hits(player, pool, slow_motion_active, &mut report);
    if report.player_died {
        return report;
    }

    boss_contact(player, boss, upgrades, &mut report);
    if report.player_died {
        return report;
    }

    graze_sweep(player, pool, upgrades, &mut report);
    report
}

fn projectile_hits(
    player: &mut Player,
    pool: &mut ProjectilePool,
    slow_motion_active: bool,
    report: &mut CollisionReport,
) {
    let hits: Vec<(ProjectileId, f32)> = pool
        .iter_active()
        .filter(|(_, p)| !p.fake)
        .map(|(id, p)| (id, p.position.distance(player.position)))
        .filter(|(_, d)| *d < HIT_RADIUS)
        .collect();

    for (id, distance) in hits {
        if player.is_dashing() {
            pool.deactivate(id);
            continue;
        }
        if distance < NEAR_MISS_DISTANCE && !slow_motion_active && !report.start_slow_motion {
            report.start_slow_motion = true;
            report.events.push(MatchEvent::SlowMotion);
        }
        if player.take_damage(1) {
            pool.deactivate(id);
            report.events.push(MatchEvent::PlayerHit {
                health: player.health(),
            });
            if player.is_dead() {
                report.player_died = true;
                return;
            }
        }
    }
}

fn boss_contact(
    player: &mut Player,
    boss: &mut Boss,
    upgrades: &UpgradeState,
    report: &mut CollisionReport,
) {
    if player.position.distance(boss.position()) >= BOSS_CONTACT_RADIUS {
        return;
    }

    if player.is_dashing() && player.is_invincible() {
        let outcome = boss.take_damage(RAM_DAMAGE);
        // The reward does not depend on the shield.
        if upgrades.life_steal {
            player.heal();
        }
        report.score_gained = report.score_gained.saturating_add(RAM_SCORE);
        report.events.push(MatchEvent::BossHit {
            applied: matches!(outcome, DamageOutcome::Applied { .. }),
            boss_health: boss.health(),
        });
        if outcome == (DamageOutcome::Applied { defeated: true }) {
            report.boss_defeated = true;
        }
    } else if !player.is_dashing() && !player.is_invincible() {
        player.kill();
        report.player_died = true;
    }
}

fn graze_sweep(
    player: &mut Player,
    pool: &ProjectilePool,
    upgrades: &UpgradeState,
    report: &mut CollisionReport,
) {
    if !player.can_graze() {
        return;
    }
    let count = pool
        .iter_active()
        .filter(|(_, p)| !p.fake)
        .map(|(_, p)| p.position.distance(player.position))
        .filter(|d| *d > HIT_RADIUS && *d < GRAZE_RADIUS)
        .count() as u32;
    if count == 0 {
        return;
    }

    let score = (count as u64)
        .saturating_mul(GRAZE_SCORE)
        .saturating_mul(upgrades.graze_multiplier);
    player.do_graze();
    report.grazes += count;
    report.score_gained = report.score_gained.saturating_add(score);
    report.events.push(MatchEvent::Grazed { count, score });
}
