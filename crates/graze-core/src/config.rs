//! Tunable match parameters, loadable from JSON.
//!
//! Every field has a default from `constants`, so a config file only needs to
//! list the values it overrides.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Arena;

/// Smallest arena the hazard placement rules can work with.
pub const MIN_ARENA_SIDE: f32 = 2.0 * SLOW_ZONE_EDGE_INSET + 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub arena_width: f32,
    pub arena_height: f32,
    pub pool_capacity: usize,
    pub projectile_lifetime_ms: f32,

    pub player_max_health: u32,
    pub player_speed: f32,
    pub dash_speed: f32,
    pub dash_duration_ms: f32,
    pub dash_cooldown_ms: f32,
    pub iframe_ms: f32,
    pub graze_cooldown_ms: f32,

    pub boss_max_health: f32,
    pub boss_move_speed: f32,
    pub phase_shield_ms: f32,

    pub slow_motion_scale: f32,
    pub slow_motion_duration_ms: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            pool_capacity: POOL_CAPACITY,
            projectile_lifetime_ms: PROJECTILE_LIFETIME_MS,
            player_max_health: PLAYER_MAX_HEALTH,
            player_speed: PLAYER_SPEED,
            dash_speed: PLAYER_DASH_SPEED,
            dash_duration_ms: PLAYER_DASH_DURATION_MS,
            dash_cooldown_ms: PLAYER_DASH_COOLDOWN_MS,
            iframe_ms: PLAYER_IFRAME_MS,
            graze_cooldown_ms: PLAYER_GRAZE_COOLDOWN_MS,
            boss_max_health: BOSS_MAX_HEALTH,
            boss_move_speed: BOSS_MOVE_SPEED,
            phase_shield_ms: PHASE_SHIELD_MS,
            slow_motion_scale: SLOW_MOTION_SCALE,
            slow_motion_duration_ms: SLOW_MOTION_DURATION_MS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, source: std::io::Error },
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read config {path}: {source}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid config field `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl Tunables {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tunables: Tunables = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        tunables.validate()?;
        Ok(tunables)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_width < MIN_ARENA_SIDE || self.arena_height < MIN_ARENA_SIDE {
            return Err(ConfigError::Invalid {
                field: "arena_width/arena_height",
                reason: format!("each side must be at least {MIN_ARENA_SIDE}"),
            });
        }
        if self.pool_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "pool_capacity",
                reason: "must be at least 1".into(),
            });
        }
        if self.player_max_health == 0 {
            return Err(ConfigError::Invalid {
                field: "player_max_health",
                reason: "must be at least 1".into(),
            });
        }
        if self.boss_max_health <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "boss_max_health",
                reason: "must be positive".into(),
            });
        }
        if !(self.slow_motion_scale > 0.0 && self.slow_motion_scale <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "slow_motion_scale",
                reason: "must be in (0, 1]".into(),
            });
        }
        Ok(())
    }
}
