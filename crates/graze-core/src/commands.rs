//! Commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::GameMode;
use crate::types::Vec2;
use crate::upgrades::UpgradeKind;

/// Logical control state for one frame.
///
/// `horizontal` and `vertical` are -1, 0 or 1. `dash` is the held state of the
/// dash button; the player controller acts on its rising edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    pub horizontal: i8,
    pub vertical: i8,
    pub aim: Vec2,
    pub aim_active: bool,
    pub dash: bool,
}

impl ControlInput {
    /// Input steering toward `aim` with no directional keys held.
    pub fn aiming_at(aim: Vec2) -> Self {
        Self {
            aim,
            aim_active: true,
            ..Default::default()
        }
    }
}

/// All possible host actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchCommand {
    /// Start (or restart) a match in the given mode.
    StartMatch { mode: GameMode },
    /// Discard all transient state and start over in the current mode.
    Restart,
    /// Replace the held control state.
    SetInput { input: ControlInput },
    /// Pick an upgrade after a boss defeat; starts the next wave.
    ApplyUpgrade { kind: UpgradeKind },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
