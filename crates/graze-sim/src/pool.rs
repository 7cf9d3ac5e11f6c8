//! Projectile pool: fixed slots, a free-slot stack, per-tick motion and expiry.
//!
//! Slots are allocated up front. A spawn with no free slot is dropped, and a
//! slot is reusable as soon as it is deactivated. Iteration is always in slot
//! order so the simulation stays deterministic.

use std::f32::consts::TAU;

use graze_core::constants::{EXPLOSION_BURST_COUNT, EXPLOSION_BURST_SPEED, OUT_OF_BOUNDS_MARGIN};
use graze_core::enums::Tint;
use graze_core::types::{angle_between, rotate_toward, velocity_from_angle, Arena, Vec2};

/// Index of a pool slot. Only meaningful while the slot stays active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectileId(pub usize);

/// Behaviour driving a projectile's motion. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Behavior {
    #[default]
    Linear,
    /// Steers toward the player by at most `strength * dt * 0.001` rad per tick.
    Homing { strength: f32 },
    /// Bursts into a ring once `timer_ms` reaches `delay_ms`.
    DelayedExplode { delay_ms: f32, timer_ms: f32 },
    /// Circles `center`; `angular_speed` is radians per second.
    Orbit {
        center: Vec2,
        radius: f32,
        angle: f32,
        angular_speed: f32,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Projectile {
    pub active: bool,
    pub position: Vec2,
    pub heading: f32,
    pub speed: f32,
    pub velocity: Vec2,
    pub age_ms: f32,
    pub lifetime_ms: f32,
    pub behavior: Behavior,
    /// Visible but excluded from damage and graze.
    pub fake: bool,
    pub tint: Tint,
}

impl Projectile {
    fn set_heading(&mut self, heading: f32) {
        self.heading = heading;
        self.velocity = velocity_from_angle(heading, self.speed);
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.behavior, Behavior::DelayedExplode { .. })
    }
}

/// Anything that can accept projectile spawns.
///
/// The pool is the production sink; pattern release code only sees this
/// trait.
pub trait SpawnSink {
    fn spawn(&mut self, origin: Vec2, angle: f32, speed: f32, tint: Tint) -> Option<ProjectileId>;
    fn set_behavior(&mut self, id: ProjectileId, behavior: Behavior);
    fn set_fake(&mut self, id: ProjectileId);

    /// `count` shots spread evenly over `[base - spread/2, base + spread/2]`.
    fn spawn_fan(
        &mut self,
        origin: Vec2,
        base_angle: f32,
        spread: f32,
        count: usize,
        speed: f32,
        tint: Tint,
    ) -> Vec<ProjectileId> {
        match count {
            0 => Vec::new(),
            1 => self.spawn(origin, base_angle, speed, tint).into_iter().collect(),
            _ => {
                let start = base_angle - spread / 2.0;
                let step = spread / (count - 1) as f32;
                (0..count)
                    .filter_map(|i| self.spawn(origin, start + step * i as f32, speed, tint))
                    .collect()
            }
        }
    }

    /// `count` shots at `2π·i/count`.
    fn spawn_circle(&mut self, origin: Vec2, count: usize, speed: f32, tint: Tint) -> Vec<ProjectileId> {
        (0..count)
            .filter_map(|i| self.spawn(origin, TAU * i as f32 / count as f32, speed, tint))
            .collect()
    }
}

pub struct ProjectilePool {
    slots: Vec<Projectile>,
    free_list: Vec<usize>,
    lifetime_ms: f32,
    burst_buffer: Vec<Vec2>,
}

impl ProjectilePool {
    pub fn new(capacity: usize, lifetime_ms: f32) -> Self {
        Self {
            slots: vec![Projectile::default(); capacity],
            // Reversed so the lowest slot is handed out first.
            free_list: (0..capacity).rev().collect(),
            lifetime_ms,
            burst_buffer: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    pub fn get(&self, id: ProjectileId) -> Option<&Projectile> {
        self.slots.get(id.0).filter(|p| p.active)
    }

    /// Active projectiles in slot order.
    pub fn iter_active(&self) -> impl Iterator<Item = (ProjectileId, &Projectile)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, p)| p.active)
            .map(|(i, p)| (ProjectileId(i), p))
    }

    /// Return a slot to the free list. Inactive slots are ignored.
    pub fn deactivate(&mut self, id: ProjectileId) {
        if let Some(p) = self.slots.get_mut(id.0) {
            if p.active {
                p.active = false;
                self.free_list.push(id.0);
            }
        }
    }

    /// Deactivate every projectile.
    pub fn clear(&mut self) {
        for i in 0..self.slots.len() {
            self.deactivate(ProjectileId(i));
        }
    }

    /// Advance every active projectile by `dt_ms`.
    ///
    /// Returns the positions of delayed-explode projectiles that burst this
    /// tick. Their rings are spawned after the pass, so they are visible to
    /// collision this tick but do not move until the next.
    pub fn update(&mut self, dt_ms: f32, player_position: Vec2, arena: Arena) -> Vec<Vec2> {
        self.burst_buffer.clear();
        let dt_s = dt_ms / 1000.0;

        for i in 0..self.slots.len() {
            let p = &mut self.slots[i];
            if !p.active {
                continue;
            }

            p.age_ms += dt_ms;
            if p.age_ms > p.lifetime_ms {
                self.deactivate(ProjectileId(i));
                continue;
            }

            match p.behavior {
                Behavior::DelayedExplode { delay_ms, timer_ms } => {
                    let timer_ms = timer_ms + dt_ms;
                    if timer_ms >= delay_ms {
                        self.burst_buffer.push(p.position);
                        self.deactivate(ProjectileId(i));
                        continue;
                    }
                    p.behavior = Behavior::DelayedExplode { delay_ms, timer_ms };
                }
                Behavior::Homing { strength } => {
                    let target = angle_between(p.position, player_position);
                    let heading = rotate_toward(p.heading, target, strength * dt_ms * 0.001);
                    p.set_heading(heading);
                }
                Behavior::Linear | Behavior::Orbit { .. } => {}
            }

            if let Behavior::Orbit {
                center,
                radius,
                angle,
                angular_speed,
            } = p.behavior
            {
                let angle = angle + angular_speed * dt_ms * 0.001;
                p.position = center + Vec2::new(angle.cos(), angle.sin()) * radius;
                p.behavior = Behavior::Orbit {
                    center,
                    radius,
                    angle,
                    angular_speed,
                };
            } else {
                p.position += p.velocity * dt_s;
            }

            if arena.is_outside(p.position, OUT_OF_BOUNDS_MARGIN) {
                self.deactivate(ProjectileId(i));
            }
        }

        let bursts = std::mem::take(&mut self.burst_buffer);
        for origin in &bursts {
            self.spawn_circle(*origin, EXPLOSION_BURST_COUNT, EXPLOSION_BURST_SPEED, Tint::EXPLOSIVE);
        }
        bursts
    }
}

impl SpawnSink for ProjectilePool {
    fn spawn(&mut self, origin: Vec2, angle: f32, speed: f32, tint: Tint) -> Option<ProjectileId> {
        let Some(i) = self.free_list.pop() else {
            tracing::trace!(capacity = self.slots.len(), "projectile pool exhausted, spawn dropped");
            return None;
        };
        self.slots[i] = Projectile {
            active: true,
            position: origin,
            heading: angle,
            speed,
            velocity: velocity_from_angle(angle, speed),
            age_ms: 0.0,
            lifetime_ms: self.lifetime_ms,
            behavior: Behavior::Linear,
            fake: false,
            tint,
        };
        Some(ProjectileId(i))
    }

    fn set_behavior(&mut self, id: ProjectileId, behavior: Behavior) {
        if let Some(p) = self.slots.get_mut(id.0).filter(|p| p.active) {
            p.behavior = behavior;
        }
    }

    fn set_fake(&mut self, id: ProjectileId) {
        if let Some(p) = self.slots.get_mut(id.0).filter(|p| p.active) {
            p.fake = true;
        }
    }
}
