//! Simulation constants and tuning parameters.
//!
//! Times are milliseconds, speeds are arena units per second.

use std::f32::consts::PI;

/// Host tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Nominal milliseconds per host tick.
pub const DT_MS: f32 = 1000.0 / TICK_RATE as f32;

// --- Arena ---

pub const ARENA_WIDTH: f32 = 800.0;
pub const ARENA_HEIGHT: f32 = 600.0;

/// Projectiles are culled once they leave the arena by more than this.
pub const OUT_OF_BOUNDS_MARGIN: f32 = 50.0;

// --- Projectiles ---

/// Maximum concurrent projectiles.
pub const POOL_CAPACITY: usize = 500;

pub const PROJECTILE_LIFETIME_MS: f32 = 5000.0;

/// Speed used when a spawn request does not specify one.
pub const PROJECTILE_DEFAULT_SPEED: f32 = 150.0;

/// Ring size released by a delayed-explode projectile.
pub const EXPLOSION_BURST_COUNT: usize = 8;
pub const EXPLOSION_BURST_SPEED: f32 = 200.0;

// --- Player ---

pub const PLAYER_MAX_HEALTH: u32 = 3;
pub const PLAYER_SPEED: f32 = 200.0;
pub const PLAYER_DASH_SPEED: f32 = 600.0;
pub const PLAYER_DASH_DURATION_MS: f32 = 200.0;
pub const PLAYER_DASH_COOLDOWN_MS: f32 = 3000.0;
pub const PLAYER_IFRAME_MS: f32 = 2000.0;
pub const PLAYER_GRAZE_COOLDOWN_MS: f32 = 100.0;

/// Half-size of the player body; also the clamp inset at the arena edge.
pub const PLAYER_HALF_SIZE: f32 = 6.0;

/// Velocity multiplier while standing in a slow zone.
pub const SLOW_ZONE_SPEED_FACTOR: f32 = 0.5;

// --- Collision ---

/// Player-vs-projectile hard-collision radius.
pub const HIT_RADIUS: f32 = 12.0;

/// Outer graze radius.
pub const GRAZE_RADIUS: f32 = 40.0;

/// Hits closer than this trigger the near-miss slow motion.
pub const NEAR_MISS_DISTANCE: f32 = 20.0;

/// Half-size of the boss body.
pub const BOSS_HALF_SIZE: f32 = 32.0;

/// Player-vs-boss contact distance.
pub const BOSS_CONTACT_RADIUS: f32 = PLAYER_HALF_SIZE + BOSS_HALF_SIZE;

// --- Scoring ---

pub const GRAZE_SCORE: u64 = 10;
pub const RAM_SCORE: u64 = 100;
pub const RAM_DAMAGE: f32 = 5.0;
pub const BOSS_DEFEAT_BONUS: u64 = 5000;

// --- Slow motion ---

pub const SLOW_MOTION_SCALE: f32 = 0.3;
pub const SLOW_MOTION_DURATION_MS: f32 = 300.0;

// --- Boss ---

pub const BOSS_MAX_HEALTH: f32 = 100.0;

/// Health-fraction thresholds (strictly greater than) for phases 1 and 2.
pub const PHASE_1_THRESHOLD: f32 = 0.7;
pub const PHASE_2_THRESHOLD: f32 = 0.3;

pub const PHASE_SHIELD_MS: f32 = 3000.0;

pub const ATTACK_INTERVAL_PHASE_1_MS: f32 = 2500.0;
pub const ATTACK_INTERVAL_PHASE_2_MS: f32 = 1800.0;
pub const ATTACK_INTERVAL_PHASE_3_MS: f32 = 1200.0;

/// Number of patterns in each phase's rotation.
pub const PHASE_PATTERN_COUNTS: [usize; 3] = [2, 3, 5];

pub const BOSS_RETARGET_INTERVAL_MS: f32 = 3000.0;
pub const BOSS_MOVE_SPEED: f32 = 30.0;

/// Horizontal half-range of the boss roaming box.
pub const BOSS_ROAM_HALF_WIDTH: f32 = 100.0;
/// Vertical half-range of the boss roaming box.
pub const BOSS_ROAM_HALF_HEIGHT: f32 = 50.0;

/// Spiral angle advance (radians per millisecond).
pub const SPIRAL_RATE_PER_MS: f32 = 0.001;

// --- Hazards ---

pub const SLOW_ZONE_DURATION_MS: f32 = 3000.0;
pub const SLOW_ZONE_FADE_MS: f32 = 500.0;
pub const SLOW_ZONE_MIN_RADIUS: f32 = 70.0;
pub const SLOW_ZONE_RADIUS_SPREAD: f32 = 30.0;
pub const SLOW_ZONE_OFFSET: f32 = 100.0;
pub const SLOW_ZONE_EDGE_INSET: f32 = 80.0;

pub const WARNING_RADIUS: f32 = 60.0;
pub const WARNING_DURATION_MS: f32 = 1000.0;

// --- Waves and upgrades ---

/// Normal mode ends in victory after this many boss defeats.
pub const NORMAL_MODE_WAVES: u32 = 3;

pub const BOSS_HEALTH_PER_WAVE: f32 = 50.0;
pub const BOSS_HEALTH_CAP: f32 = 300.0;

pub const BOSS_MOVE_SPEED_PER_WAVE: f32 = 5.0;
pub const BOSS_MOVE_SPEED_CAP: f32 = 100.0;

pub const DASH_COOLDOWN_REDUCTION_STEP: f32 = 0.2;
pub const DASH_DISTANCE_INCREASE_STEP: f32 = 0.3;
pub const MOVE_SPEED_UPGRADE_FACTOR: f32 = 1.15;
pub const GRAZE_MULTIPLIER_STEP: u64 = 2;

// --- Pattern parameters ---

pub const FAN_SPREAD_WIDE: f32 = PI / 3.0;
pub const FAN_SPREAD_REAR: f32 = PI / 2.0;
pub const HOMING_STRENGTH: f32 = 0.03;
pub const EXPLODE_BASE_DELAY_MS: f32 = 1500.0;
pub const EXPLODE_DELAY_STEP_MS: f32 = 200.0;
