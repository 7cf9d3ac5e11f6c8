//! Fundamental geometric and simulation types.
//!
//! Arena space is 2D with the origin at the top-left corner and +y pointing
//! down. Angles are radians measured from +x toward +y, so an angle of π/2
//! points straight down the screen.

use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

pub use glam::Vec2;

/// Angle from `from` to `to` in radians.
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Unit vector for a heading angle.
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Velocity for a heading angle and speed (units/s).
pub fn velocity_from_angle(angle: f32, speed: f32) -> Vec2 {
    heading_vector(angle) * speed
}

/// Wrap an angle into (-π, π].
pub fn wrap_angle(angle: f32) -> f32 {
    let a = (angle + PI).rem_euclid(TAU) - PI;
    if a <= -PI {
        a + TAU
    } else {
        a
    }
}

/// Rotate `current` toward `target` along the shortest arc by at most `max_step`.
pub fn rotate_toward(current: f32, target: f32, max_step: f32) -> f32 {
    let diff = wrap_angle(target - current);
    if diff.abs() <= max_step {
        wrap_angle(current + diff)
    } else {
        wrap_angle(current + max_step * diff.signum())
    }
}

/// Axis-aligned arena rectangle anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True if `pos` lies outside the arena by more than `margin` on any side.
    pub fn is_outside(&self, pos: Vec2, margin: f32) -> bool {
        pos.x < -margin
            || pos.x > self.width + margin
            || pos.y < -margin
            || pos.y > self.height + margin
    }

    /// Clamp a point into the arena, keeping `inset` away from each edge.
    pub fn clamp(&self, pos: Vec2, inset: f32) -> Vec2 {
        Vec2::new(
            clamp_axis(pos.x, inset, self.width),
            clamp_axis(pos.y, inset, self.height),
        )
    }
}

/// A side narrower than twice the inset collapses onto its midpoint.
fn clamp_axis(value: f32, inset: f32, side: f32) -> f32 {
    if inset * 2.0 > side {
        side * 0.5
    } else {
        value.clamp(inset, side - inset)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(
            crate::constants::ARENA_WIDTH,
            crate::constants::ARENA_HEIGHT,
        )
    }
}

/// Match clock. Advances by the effective (time-scaled) delta every active tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MatchClock {
    /// Number of simulated ticks.
    pub tick: u64,
    /// Elapsed game time in milliseconds.
    pub elapsed_ms: f32,
}

impl MatchClock {
    /// Advance by one tick of `dt_ms` game milliseconds.
    pub fn advance(&mut self, dt_ms: f32) {
        self.tick += 1;
        self.elapsed_ms += dt_ms;
    }
}

/// A circle in arena space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Strict containment test (points on the rim are outside).
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance_squared(point) < self.radius * self.radius
    }
}
