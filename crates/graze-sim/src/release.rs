//! Turns a due spawn order into projectiles.
//!
//! Anchors and spiral headings resolve against the boss at release time, not
//! when the attack was planned.

use graze_core::types::Vec2;
use graze_patterns::orders::{Anchor, Heading, Shot, ShotBehavior, SpawnOrder};

use crate::pool::{Behavior, ProjectileId, SpawnSink};

pub fn release<S: SpawnSink + ?Sized>(
    order: &SpawnOrder,
    boss_position: Vec2,
    spiral_angle: f32,
    sink: &mut S,
) -> Vec<ProjectileId> {
    let origin = match order.anchor {
        Anchor::Boss => boss_position,
        Anchor::At(point) => point,
    };

    match order.shot {
        Shot::Single {
            heading,
            speed,
            behavior,
        } => {
            let angle = match heading {
                Heading::Fixed(angle) => angle,
                Heading::Spiral(offset) => spiral_angle + offset,
            };
            let Some(id) = sink.spawn(origin, angle, speed, order.tint) else {
                return Vec::new();
            };
            match behavior {
                ShotBehavior::Plain => {}
                ShotBehavior::Homing { strength } => {
                    sink.set_behavior(id, Behavior::Homing { strength })
                }
                ShotBehavior::DelayedExplode { delay_ms } => sink.set_behavior(
                    id,
                    Behavior::DelayedExplode {
                        delay_ms,
                        timer_ms: 0.0,
                    },
                ),
                ShotBehavior::Fake => sink.set_fake(id),
            }
            vec![id]
        }
        Shot::Fan {
            base_angle,
            spread,
            count,
            speed,
        } => sink.spawn_fan(origin, base_angle, spread, count, speed, order.tint),
        Shot::Ring { count, speed } => sink.spawn_circle(origin, count, speed, order.tint),
    }
}
