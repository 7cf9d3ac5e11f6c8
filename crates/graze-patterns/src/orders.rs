//! Orders produced by pattern generators.
//!
//! A generator never touches the projectile pool. It describes what to release
//! and when; the simulation resolves anchors at release time and performs the
//! spawns, either immediately (zero delay) or through its scheduler.

use graze_core::enums::Tint;
use graze_core::types::Vec2;

/// Where a spawn originates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// The boss position at the moment of release.
    Boss,
    /// A fixed arena point captured when the pattern was issued.
    At(Vec2),
}

/// Heading of a single shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Heading {
    /// Absolute angle captured when the pattern was issued.
    Fixed(f32),
    /// Boss spiral angle at release plus an offset.
    Spiral(f32),
}

/// Extra behaviour attached to a single shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotBehavior {
    Plain,
    Homing { strength: f32 },
    DelayedExplode { delay_ms: f32 },
    Fake,
}

/// Shape of one release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shot {
    Single {
        heading: Heading,
        speed: f32,
        behavior: ShotBehavior,
    },
    Fan {
        base_angle: f32,
        spread: f32,
        count: usize,
        speed: f32,
    },
    Ring {
        count: usize,
        speed: f32,
    },
}

/// One projectile release, `delay_ms` after the attack fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnOrder {
    pub delay_ms: f32,
    pub anchor: Anchor,
    pub shot: Shot,
    pub tint: Tint,
}

impl SpawnOrder {
    pub fn now(anchor: Anchor, shot: Shot, tint: Tint) -> Self {
        Self {
            delay_ms: 0.0,
            anchor,
            shot,
            tint,
        }
    }

    pub fn after(delay_ms: f32, anchor: Anchor, shot: Shot, tint: Tint) -> Self {
        Self {
            delay_ms,
            anchor,
            shot,
            tint,
        }
    }
}

/// Everything one attack asks of the simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum AttackOrder {
    Spawn(SpawnOrder),
    /// Place a slow zone.
    SlowZone { center: Vec2, radius: f32 },
    /// Show a warning outline for `duration_ms`.
    Warning {
        center: Vec2,
        radius: f32,
        duration_ms: f32,
    },
}
