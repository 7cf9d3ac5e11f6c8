//! Player controller: movement, dash, damage and graze timers.

use graze_core::commands::ControlInput;
use graze_core::config::Tunables;
use graze_core::constants::{PLAYER_HALF_SIZE, SLOW_ZONE_SPEED_FACTOR};
use graze_core::types::{angle_between, velocity_from_angle, Arena, Vec2};
use graze_core::upgrades::UpgradeEffect;

/// Player spawn point in a default-sized arena, scaled for other sizes.
pub fn spawn_point(arena: Arena) -> Vec2 {
    Vec2::new(arena.width * 0.5, arena.height * 0.8)
}

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    velocity: Vec2,
    health: u32,
    max_health: u32,

    speed: f32,
    dash_speed: f32,
    dash_duration_ms: f32,
    dash_cooldown_max_ms: f32,
    iframe_ms: f32,
    graze_cooldown_max_ms: f32,

    dashing: bool,
    dash_timer_ms: f32,
    dash_cooldown_ms: f32,
    iframe_timer_ms: f32,
    graze_cooldown_ms: f32,
    dash_held: bool,

    /// Set by the match from the boss's slow zones.
    pub slowed: bool,
}

impl Player {
    pub fn new(position: Vec2, tunables: &Tunables) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            health: tunables.player_max_health,
            max_health: tunables.player_max_health,
            speed: tunables.player_speed,
            dash_speed: tunables.dash_speed,
            dash_duration_ms: tunables.dash_duration_ms,
            dash_cooldown_max_ms: tunables.dash_cooldown_ms,
            iframe_ms: tunables.iframe_ms,
            graze_cooldown_max_ms: tunables.graze_cooldown_ms,
            dashing: false,
            dash_timer_ms: 0.0,
            dash_cooldown_ms: 0.0,
            iframe_timer_ms: 0.0,
            graze_cooldown_ms: 0.0,
            dash_held: false,
            slowed: false,
        }
    }

    /// Advance timers, react to input and integrate position.
    pub fn update(&mut self, dt_ms: f32, input: &ControlInput, arena: Arena) {
        self.dash_cooldown_ms -= dt_ms;
        self.graze_cooldown_ms -= dt_ms;
        if self.iframe_timer_ms > 0.0 {
            self.iframe_timer_ms = (self.iframe_timer_ms - dt_ms).max(0.0);
        }
        if self.dashing {
            self.dash_timer_ms -= dt_ms;
            if self.dash_timer_ms <= 0.0 {
                self.dashing = false;
                self.velocity = Vec2::ZERO;
            }
        }

        let dash_pressed = input.dash && !self.dash_held;
        self.dash_held = input.dash;
        if dash_pressed && !self.dashing && self.dash_cooldown_ms <= 0.0 {
            self.start_dash(input.aim);
        }

        if !self.dashing {
            self.velocity = self.steer(input);
        }

        self.position += self.velocity * (dt_ms / 1000.0);
        self.position = arena.clamp(self.position, PLAYER_HALF_SIZE);
    }

    fn start_dash(&mut self, aim: Vec2) {
        let angle = angle_between(self.position, aim);
        self.dashing = true;
        self.dash_timer_ms = self.dash_duration_ms;
        self.dash_cooldown_ms = self.dash_cooldown_max_ms;
        self.velocity = velocity_from_angle(angle, self.dash_speed);
    }

    fn steer(&self, input: &ControlInput) -> Vec2 {
        let velocity = if input.aim_active {
            if input.aim.distance_squared(self.position) < 1.0 {
                Vec2::ZERO
            } else {
                velocity_from_angle(angle_between(self.position, input.aim), self.speed)
            }
        } else {
            Vec2::new(
                input.horizontal.signum() as f32 * self.speed,
                input.vertical.signum() as f32 * self.speed,
            )
        };
        if self.slowed {
            velocity * SLOW_ZONE_SPEED_FACTOR
        } else {
            velocity
        }
    }

    /// Apply damage unless invincible. Returns whether it landed.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        if self.is_invincible() {
            return false;
        }
        self.health = self.health.saturating_sub(amount);
        self.iframe_timer_ms = self.iframe_ms;
        true
    }

    pub fn heal(&mut self) {
        self.health = (self.health + 1).min(self.max_health);
    }

    /// Instant death from boss contact.
    pub fn kill(&mut self) {
        self.health = 0;
    }

    pub fn can_graze(&self) -> bool {
        self.graze_cooldown_ms <= 0.0
    }

    pub fn do_graze(&mut self) {
        self.graze_cooldown_ms = self.graze_cooldown_max_ms;
    }

    pub fn apply_upgrade(&mut self, effect: UpgradeEffect) {
        match effect {
            UpgradeEffect::ScaleDashCooldown(scale) => self.dash_cooldown_max_ms *= scale,
            UpgradeEffect::ScaleDashSpeed(scale) => self.dash_speed *= scale,
            UpgradeEffect::ScaleMoveSpeed(scale) => self.speed *= scale,
            UpgradeEffect::MatchOnly => {}
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.dashing || self.iframe_timer_ms > 0.0
    }

    pub fn is_dashing(&self) -> bool {
        self.dashing
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn dash_speed(&self) -> f32 {
        self.dash_speed
    }

    pub fn iframe_remaining_ms(&self) -> f32 {
        self.iframe_timer_ms
    }

    pub fn dash_cooldown_remaining_ms(&self) -> f32 {
        self.dash_cooldown_ms.max(0.0)
    }

    pub fn dash_cooldown_max_ms(&self) -> f32 {
        self.dash_cooldown_max_ms
    }
}
