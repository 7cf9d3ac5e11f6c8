//! Boss controller: health and phase, attack timing, roaming, hazard zones.
//!
//! Pattern choice and phase maths live in `graze-patterns`; this module owns
//! the mutable state and hands spawn orders back to the match.

use rand::Rng;

use graze_core::config::Tunables;
use graze_core::constants::*;
use graze_core::enums::BossPhase;
use graze_core::types::{Arena, Circle, Vec2};
use graze_patterns::generators::{plan_attack, AttackContext};
use graze_patterns::movement::{pick_roam_target, roam_velocity};
use graze_patterns::orders::{AttackOrder, SpawnOrder};
use graze_patterns::phase::{attack_interval_ms, evaluate, PhaseContext};
use graze_patterns::repertoire::next_index;

/// Render-side handle for the boss body. Only position is ever synced.
pub trait VisualHandle: Send {
    fn sync_position(&mut self, position: Vec2);
}

/// Handle for headless runs.
#[derive(Debug, Default)]
pub struct NullVisual;

impl VisualHandle for NullVisual {
    fn sync_position(&mut self, _position: Vec2) {}
}

/// Boss spawn point in a default-sized arena, scaled for other sizes.
pub fn spawn_point(arena: Arena) -> Vec2 {
    Vec2::new(arena.width * 0.5, arena.height * 0.25)
}

/// Result of `Boss::take_damage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Health was already zero; nothing changed.
    AlreadyDefeated,
    /// Phase shield is up; nothing changed.
    Shielded,
    Applied { defeated: bool },
}

/// A timed circular area: slow zone or warning telegraph.
#[derive(Debug, Clone, Copy)]
pub struct Hazard {
    pub area: Circle,
    pub remaining_ms: f32,
}

impl Hazard {
    pub fn is_fading(&self) -> bool {
        self.remaining_ms <= SLOW_ZONE_FADE_MS
    }
}

pub struct Boss {
    position: Vec2,
    health: f32,
    max_health: f32,
    phase: BossPhase,
    shield_ms: f32,
    shield_duration_ms: f32,
    attack_timer_ms: f32,
    pattern_index: [usize; 3],
    move_target: Vec2,
    move_timer_ms: f32,
    move_speed: f32,
    spiral_angle: f32,
    slow_zones: Vec<Hazard>,
    warnings: Vec<Hazard>,
    visual: Box<dyn VisualHandle>,
}

impl Boss {
    pub fn new(position: Vec2, tunables: &Tunables, visual: Box<dyn VisualHandle>) -> Self {
        let mut boss = Self {
            position,
            health: tunables.boss_max_health,
            max_health: tunables.boss_max_health,
            phase: BossPhase::One,
            // Shielded from the first frame.
            shield_ms: tunables.phase_shield_ms,
            shield_duration_ms: tunables.phase_shield_ms,
            attack_timer_ms: 0.0,
            pattern_index: [0; 3],
            move_target: position,
            move_timer_ms: 0.0,
            move_speed: tunables.boss_move_speed,
            spiral_angle: 0.0,
            slow_zones: Vec::new(),
            warnings: Vec::new(),
            visual,
        };
        boss.visual.sync_position(position);
        boss
    }

    /// Put the boss back to its starting state, keeping the visual handle.
    pub fn reset(&mut self, position: Vec2, tunables: &Tunables) {
        let visual = std::mem::replace(&mut self.visual, Box::new(NullVisual));
        *self = Boss::new(position, tunables, visual);
    }

    pub fn set_visual(&mut self, visual: Box<dyn VisualHandle>) {
        self.visual = visual;
        self.visual.sync_position(self.position);
    }

    /// Advance one tick. Returns spawn orders from any attack fired this tick,
    /// with delays relative to now.
    pub fn update<R: Rng>(
        &mut self,
        dt_ms: f32,
        player_position: Vec2,
        arena: Arena,
        rng: &mut R,
    ) -> Vec<SpawnOrder> {
        self.refresh_phase();
        if self.shield_ms > 0.0 {
            self.shield_ms = (self.shield_ms - dt_ms).max(0.0);
        }

        self.move_timer_ms += dt_ms;
        if self.move_timer_ms > BOSS_RETARGET_INTERVAL_MS {
            self.move_timer_ms = 0.0;
            self.move_target = pick_roam_target(arena, rng);
        }
        let velocity = roam_velocity(self.position, self.move_target, self.move_speed);
        self.position += velocity * (dt_ms / 1000.0);
        self.visual.sync_position(self.position);

        self.spiral_angle += dt_ms * SPIRAL_RATE_PER_MS;

        tick_hazards(&mut self.slow_zones, dt_ms);
        tick_hazards(&mut self.warnings, dt_ms);

        self.attack_timer_ms += dt_ms;
        if self.attack_timer_ms < attack_interval_ms(self.phase) {
            return Vec::new();
        }
        self.attack_timer_ms = 0.0;
        self.attack(player_position, arena, rng)
    }

    fn attack<R: Rng>(&mut self, player_position: Vec2, arena: Arena, rng: &mut R) -> Vec<SpawnOrder> {
        let slot = self.phase.index();
        let ctx = AttackContext {
            phase: self.phase,
            pattern_index: self.pattern_index[slot],
            boss_position: self.position,
            player_position,
            arena,
        };
        self.pattern_index[slot] = next_index(self.phase, self.pattern_index[slot]);

        let plan = plan_attack(&ctx, rng);
        let mut spawns = Vec::new();
        for order in plan.orders {
            match order {
                AttackOrder::Spawn(spawn) => spawns.push(spawn),
                AttackOrder::SlowZone { center, radius } => self.slow_zones.push(Hazard {
                    area: Circle::new(center, radius),
                    remaining_ms: SLOW_ZONE_DURATION_MS,
                }),
                AttackOrder::Warning {
                    center,
                    radius,
                    duration_ms,
                } => self.warnings.push(Hazard {
                    area: Circle::new(center, radius),
                    remaining_ms: duration_ms,
                }),
            }
        }
        spawns
    }

    /// Apply damage from a ram.
    pub fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        if self.health <= 0.0 {
            return DamageOutcome::AlreadyDefeated;
        }
        if self.shield_ms > 0.0 {
            return DamageOutcome::Shielded;
        }
        self.health = (self.health - amount).max(0.0);
        self.refresh_phase();
        DamageOutcome::Applied {
            defeated: self.health <= 0.0,
        }
    }

    /// Raise max health for the next wave and refill.
    pub fn begin_wave(&mut self, max_health: f32) {
        self.max_health = max_health;
        self.health = max_health;
        self.attack_timer_ms = 0.0;
        self.slow_zones.clear();
        self.warnings.clear();
        self.refresh_phase();
    }

    pub fn set_move_speed(&mut self, move_speed: f32) {
        self.move_speed = move_speed;
    }

    fn refresh_phase(&mut self) {
        let update = evaluate(&PhaseContext {
            last_phase: self.phase,
            health: self.health,
            max_health: self.max_health,
            shield_remaining_ms: self.shield_ms,
            shield_duration_ms: self.shield_duration_ms,
        });
        if update.phase_changed {
            tracing::debug!(
                from = self.phase.number(),
                to = update.new_phase.number(),
                health = self.health,
                "boss phase change"
            );
        }
        self.phase = update.new_phase;
        self.shield_ms = update.shield_remaining_ms;
    }

    /// Strict inside test against every live slow zone.
    pub fn is_in_slow_zone(&self, point: Vec2) -> bool {
        self.slow_zones.iter().any(|z| z.area.contains(point))
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    pub fn health_percent(&self) -> f32 {
        if self.max_health > 0.0 {
            self.health / self.max_health * 100.0
        } else {
            0.0
        }
    }

    pub fn phase(&self) -> BossPhase {
        self.phase
    }

    pub fn shield_remaining_ms(&self) -> f32 {
        self.shield_ms
    }

    pub fn is_shielded(&self) -> bool {
        self.shield_ms > 0.0
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn spiral_angle(&self) -> f32 {
        self.spiral_angle
    }

    pub fn pattern_index(&self, phase: BossPhase) -> usize {
        self.pattern_index[phase.index()]
    }

    pub fn slow_zones(&self) -> &[Hazard] {
        &self.slow_zones
    }

    pub fn warnings(&self) -> &[Hazard] {
        &self.warnings
    }

    #[cfg(test)]
    pub(crate) fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.move_target = position;
    }

    #[cfg(test)]
    pub(crate) fn clear_shield(&mut self) {
        self.shield_ms = 0.0;
    }

    #[cfg(test)]
    pub(crate) fn push_slow_zone(&mut self, center: Vec2, radius: f32) {
        self.slow_zones.push(Hazard {
            area: Circle::new(center, radius),
            remaining_ms: SLOW_ZONE_DURATION_MS,
        });
    }
}

fn tick_hazards(hazards: &mut Vec<Hazard>, dt_ms: f32) {
    for h in hazards.iter_mut() {
        h.remaining_ms -= dt_ms;
    }
    hazards.retain(|h| h.remaining_ms > 0.0);
}
