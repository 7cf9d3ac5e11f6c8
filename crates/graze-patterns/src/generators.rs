//! Pattern generators.
//!
//! `plan_attack` dispatches on the phase's current rotation slot and returns
//! the orders for that attack. Staggered patterns express their stagger as
//! increasing `delay_ms` offsets, never as tick counts.

use std::f32::consts::{PI, TAU};

use rand::Rng;

use graze_core::constants::*;
use graze_core::enums::{BossPhase, Tint};
use graze_core::types::{angle_between, Arena, Vec2};

use crate::orders::{Anchor, AttackOrder, Heading, Shot, ShotBehavior, SpawnOrder};
use crate::repertoire::{pattern_at, PatternId};

/// Input to a pattern generator.
pub struct AttackContext {
    pub phase: BossPhase,
    pub pattern_index: usize,
    pub boss_position: Vec2,
    pub player_position: Vec2,
    pub arena: Arena,
}

impl AttackContext {
    /// Angle from the boss to the player when the attack fires.
    pub fn aim(&self) -> f32 {
        angle_between(self.boss_position, self.player_position)
    }
}

/// The orders for one attack.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackPlan {
    pub pattern: PatternId,
    pub orders: Vec<AttackOrder>,
}

/// Build the attack for the context's phase and rotation slot.
pub fn plan_attack<R: Rng>(ctx: &AttackContext, rng: &mut R) -> AttackPlan {
    let pattern = pattern_at(ctx.phase, ctx.pattern_index);
    let orders = match pattern {
        PatternId::AimedFan => aimed_fan(ctx),
        PatternId::Ring => ring(),
        PatternId::RingWaves => ring_waves(),
        PatternId::DelayedBurst => delayed_burst(ctx, rng),
        PatternId::HomingFan => homing_fan(ctx),
        PatternId::CrossBarrage => cross_barrage(ctx.arena),
        PatternId::DecoyVolley => decoy_volley(ctx),
        PatternId::WarningBurst => warning_burst(ctx),
        PatternId::SpiralStorm => spiral_storm(),
        PatternId::SlowZones => slow_zones(ctx, rng),
    };
    tracing::debug!(phase = ctx.phase.number(), ?pattern, orders = orders.len(), "boss attack");
    AttackPlan { pattern, orders }
}

fn aimed_fan(ctx: &AttackContext) -> Vec<AttackOrder> {
    vec![AttackOrder::Spawn(SpawnOrder::now(
        Anchor::Boss,
        Shot::Fan {
            base_angle: ctx.aim(),
            spread: FAN_SPREAD_WIDE,
            count: 5,
            speed: 150.0,
        },
        Tint::DEFAULT,
    ))]
}

fn ring() -> Vec<AttackOrder> {
    vec![AttackOrder::Spawn(SpawnOrder::now(
        Anchor::Boss,
        Shot::Ring {
            count: 12,
            speed: 120.0,
        },
        Tint::RING,
    ))]
}

fn ring_waves() -> Vec<AttackOrder> {
    (0..3)
        .map(|i| {
            AttackOrder::Spawn(SpawnOrder::after(
                i as f32 * 200.0,
                Anchor::Boss,
                Shot::Ring {
                    count: 8,
                    speed: 150.0 + i as f32 * 20.0,
                },
                Tint::WAVE,
            ))
        })
        .collect()
}

fn delayed_burst<R: Rng>(ctx: &AttackContext, rng: &mut R) -> Vec<AttackOrder> {
    let aim = ctx.aim();
    (0..5)
        .map(|i| {
            let jitter: f32 = rng.gen_range(-0.25..0.25);
            AttackOrder::Spawn(SpawnOrder::now(
                Anchor::Boss,
                Shot::Single {
                    heading: Heading::Fixed(aim + jitter),
                    speed: 100.0,
                    behavior: ShotBehavior::DelayedExplode {
                        delay_ms: EXPLODE_BASE_DELAY_MS + i as f32 * EXPLODE_DELAY_STEP_MS,
                    },
                },
                Tint::EXPLOSIVE,
            ))
        })
        .collect()
}

fn homing_fan(ctx: &AttackContext) -> Vec<AttackOrder> {
    let aim = ctx.aim();
    vec![
        AttackOrder::Spawn(SpawnOrder::now(
            Anchor::Boss,
            Shot::Single {
                heading: Heading::Fixed(aim),
                speed: 120.0,
                behavior: ShotBehavior::Homing {
                    strength: HOMING_STRENGTH,
                },
            },
            Tint::HOMING,
        )),
        AttackOrder::Spawn(SpawnOrder::after(
            300.0,
            Anchor::Boss,
            Shot::Fan {
                base_angle: aim + PI,
                spread: FAN_SPREAD_REAR,
                count: 4,
                speed: 140.0,
            },
            Tint::DEFAULT,
        )),
    ]
}

fn cross_barrage(arena: Arena) -> Vec<AttackOrder> {
    let (w, h) = (arena.width, arena.height);
    let line = |delay_ms: f32, from: Vec2, angle: f32| {
        AttackOrder::Spawn(SpawnOrder::after(
            delay_ms,
            Anchor::At(from),
            Shot::Single {
                heading: Heading::Fixed(angle),
                speed: 200.0,
                behavior: ShotBehavior::Plain,
            },
            Tint::DANGER,
        ))
    };

    let mut orders = Vec::with_capacity(20);
    for i in 0..5 {
        let delay = i as f32 * 100.0;
        let y = h * (i + 1) as f32 / 6.0;
        orders.push(line(delay, Vec2::new(0.0, y), 0.0));
        orders.push(line(delay, Vec2::new(w, y), PI));
    }
    for i in 0..5 {
        let x = w * (i + 1) as f32 / 6.0;
        orders.push(line(500.0, Vec2::new(x, 0.0), PI / 2.0));
        orders.push(line(500.0, Vec2::new(x, h), -PI / 2.0));
    }
    orders
}

fn decoy_volley(ctx: &AttackContext) -> Vec<AttackOrder> {
    let aim = ctx.aim();
    let mut orders = Vec::with_capacity(14);
    for i in 0..8 {
        orders.push(AttackOrder::Spawn(SpawnOrder::now(
            Anchor::Boss,
            Shot::Single {
                heading: Heading::Fixed(i as f32 / 8.0 * TAU),
                speed: 80.0,
                behavior: ShotBehavior::Fake,
            },
            Tint::DECOY,
        )));
    }
    for i in 0..6 {
        orders.push(AttackOrder::Spawn(SpawnOrder::after(
            500.0,
            Anchor::Boss,
            Shot::Single {
                heading: Heading::Fixed(aim + (i as f32 - 3.0) * 0.2),
                speed: 180.0,
                behavior: ShotBehavior::Plain,
            },
            Tint::DEFAULT,
        )));
    }
    orders
}

fn warning_burst(ctx: &AttackContext) -> Vec<AttackOrder> {
    let target = ctx.player_position;
    vec![
        AttackOrder::Warning {
            center: target,
            radius: WARNING_RADIUS,
            duration_ms: WARNING_DURATION_MS,
        },
        AttackOrder::Spawn(SpawnOrder::after(
            WARNING_DURATION_MS,
            Anchor::At(target),
            Shot::Ring {
                count: 10,
                speed: 150.0,
            },
            Tint::DANGER,
        )),
    ]
}

fn spiral_storm() -> Vec<AttackOrder> {
    (0..16)
        .map(|i| {
            AttackOrder::Spawn(SpawnOrder::after(
                i as f32 * 50.0,
                Anchor::Boss,
                Shot::Single {
                    heading: Heading::Spiral(i as f32 * TAU / 8.0),
                    speed: 180.0 + i as f32 * 10.0,
                    behavior: ShotBehavior::Plain,
                },
                Tint::HOMING,
            ))
        })
        .collect()
}

fn slow_zones<R: Rng>(ctx: &AttackContext, rng: &mut R) -> Vec<AttackOrder> {
    let count = rng.gen_range(1..=2);
    (0..count)
        .map(|_| {
            let offset = Vec2::new(
                rng.gen_range(-SLOW_ZONE_OFFSET..SLOW_ZONE_OFFSET),
                rng.gen_range(-SLOW_ZONE_OFFSET..SLOW_ZONE_OFFSET),
            );
            let center = ctx
                .arena
                .clamp(ctx.player_position + offset, SLOW_ZONE_EDGE_INSET);
            let radius = SLOW_ZONE_MIN_RADIUS + rng.gen::<f32>() * SLOW_ZONE_RADIUS_SPREAD;
            AttackOrder::SlowZone { center, radius }
        })
        .collect()
}
