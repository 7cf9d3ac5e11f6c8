//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level match lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// No match started yet.
    #[default]
    Idle,
    /// Simulation running.
    Active,
    /// Paused by the player; all timers frozen.
    Paused,
    /// Boss defeated; waiting for an upgrade choice or the victory screen.
    BossDefeated,
    /// Player health reached zero.
    GameOver,
    /// Normal mode completed.
    Victory,
}

impl MatchPhase {
    /// True for phases the simulation will never leave without a restart.
    pub fn is_terminal(self) -> bool {
        matches!(self, MatchPhase::GameOver | MatchPhase::Victory)
    }
}

/// Boss phase. Derived from the boss health fraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BossPhase {
    #[default]
    One,
    Two,
    Three,
}

impl BossPhase {
    /// 1-based phase number for display.
    pub fn number(self) -> u8 {
        match self {
            BossPhase::One => 1,
            BossPhase::Two => 2,
            BossPhase::Three => 3,
        }
    }

    /// 0-based index for per-phase tables.
    pub fn index(self) -> usize {
        self.number() as usize - 1
    }
}

/// Game mode selected at match start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Normal,
    Endless,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Normal => "normal",
            GameMode::Endless => "endless",
        }
    }
}

/// Cosmetic projectile colour, passed through to the renderer untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint(pub u32);

impl Tint {
    pub const DEFAULT: Tint = Tint(0xff0066);
    pub const RING: Tint = Tint(0xff3366);
    pub const WAVE: Tint = Tint(0xff66cc);
    pub const EXPLOSIVE: Tint = Tint(0xffff00);
    pub const HOMING: Tint = Tint(0xff00ff);
    pub const DANGER: Tint = Tint(0xff0000);
    pub const DECOY: Tint = Tint(0xff6600);
}
