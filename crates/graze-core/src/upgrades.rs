//! Between-wave upgrades and wave progression policy.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::GameMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UpgradeKind {
    /// Dash cooldown -20% (compounding).
    DashCooldown,
    /// Dash speed +30% (compounding), so each dash covers more ground.
    DashDistance,
    /// Base move speed +15%.
    MoveSpeed,
    /// Graze score x2.
    GrazeScore,
    /// Ramming the boss heals one point of health.
    LifeSteal,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 5] = [
        UpgradeKind::DashCooldown,
        UpgradeKind::DashDistance,
        UpgradeKind::MoveSpeed,
        UpgradeKind::GrazeScore,
        UpgradeKind::LifeSteal,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dash-cooldown" => Some(Self::DashCooldown),
            "dash-distance" => Some(Self::DashDistance),
            "move-speed" => Some(Self::MoveSpeed),
            "graze-score" => Some(Self::GrazeScore),
            "life-steal" => Some(Self::LifeSteal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DashCooldown => "dash-cooldown",
            Self::DashDistance => "dash-distance",
            Self::MoveSpeed => "move-speed",
            Self::GrazeScore => "graze-score",
            Self::LifeSteal => "life-steal",
        }
    }
}

/// Scaling the player controller must apply after an upgrade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpgradeEffect {
    ScaleDashCooldown(f32),
    ScaleDashSpeed(f32),
    ScaleMoveSpeed(f32),
    /// Nothing on the player changes; the match reads the new state directly.
    MatchOnly,
}

/// Accumulated upgrade tunables for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeState {
    pub dash_cooldown_reduction: f32,
    pub dash_distance_increase: f32,
    pub move_speed_level: u32,
    pub graze_multiplier: u64,
    pub life_steal: bool,
}

impl Default for UpgradeState {
    fn default() -> Self {
        Self {
            dash_cooldown_reduction: 0.0,
            dash_distance_increase: 0.0,
            move_speed_level: 0,
            graze_multiplier: 1,
            life_steal: false,
        }
    }
}

impl UpgradeState {
    /// Record an upgrade and return the player-side scaling it implies.
    ///
    /// Dash cooldown and dash distance compound on top of earlier picks: the
    /// second cooldown pick multiplies the already-reduced cooldown by 0.6.
    pub fn apply(&mut self, kind: UpgradeKind) -> UpgradeEffect {
        match kind {
            UpgradeKind::DashCooldown => {
                self.dash_cooldown_reduction += DASH_COOLDOWN_REDUCTION_STEP;
                UpgradeEffect::ScaleDashCooldown((1.0 - self.dash_cooldown_reduction).max(0.0))
            }
            UpgradeKind::DashDistance => {
                self.dash_distance_increase += DASH_DISTANCE_INCREASE_STEP;
                UpgradeEffect::ScaleDashSpeed(1.0 + self.dash_distance_increase)
            }
            UpgradeKind::MoveSpeed => {
                self.move_speed_level += 1;
                UpgradeEffect::ScaleMoveSpeed(MOVE_SPEED_UPGRADE_FACTOR)
            }
            UpgradeKind::GrazeScore => {
                self.graze_multiplier = self.graze_multiplier.saturating_mul(GRAZE_MULTIPLIER_STEP);
                UpgradeEffect::MatchOnly
            }
            UpgradeKind::LifeSteal => {
                self.life_steal = true;
                UpgradeEffect::MatchOnly
            }
        }
    }
}

/// What happens after the boss is defeated on a given wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefeatOutcome {
    /// Run is won; no further waves.
    Victory,
    /// Offer an upgrade, then start the next wave.
    UpgradeOffer,
}

/// Normal mode is won after `NORMAL_MODE_WAVES` defeats; endless never ends.
pub fn outcome_after_defeat(mode: GameMode, wave: u32) -> DefeatOutcome {
    match mode {
        GameMode::Normal if wave >= NORMAL_MODE_WAVES => DefeatOutcome::Victory,
        _ => DefeatOutcome::UpgradeOffer,
    }
}

/// Boss max health for the wave after a defeat.
pub fn next_wave_boss_health(current_max: f32) -> f32 {
    (current_max + BOSS_HEALTH_PER_WAVE).min(BOSS_HEALTH_CAP)
}

/// Boss roaming speed for an endless-mode wave.
pub fn endless_boss_move_speed(wave: u32) -> f32 {
    (BOSS_MOVE_SPEED + BOSS_MOVE_SPEED_PER_WAVE * wave as f32).min(BOSS_MOVE_SPEED_CAP)
}
