//! Per-phase attack repertoire.
//!
//! Each phase cycles through its patterns in table order, one per attack.

use graze_core::constants::PHASE_PATTERN_COUNTS;
use graze_core::enums::BossPhase;

/// Every attack pattern the boss knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternId {
    /// Aimed 5-way fan.
    AimedFan,
    /// 12-way ring.
    Ring,
    /// Three 8-way rings released 200 ms apart, each faster than the last.
    RingWaves,
    /// Aimed volley of shots that burst after a delay.
    DelayedBurst,
    /// One slow homing shot plus a rear fan.
    HomingFan,
    /// Edge-to-edge crossing lines, horizontal then vertical.
    CrossBarrage,
    /// Harmless decoy ring followed by a real aimed volley.
    DecoyVolley,
    /// Telegraphed ring dropped on the player's position.
    WarningBurst,
    /// Staggered 16-shot spiral.
    SpiralStorm,
    /// Slow zones placed around the player.
    SlowZones,
}

const PHASE_ONE: [PatternId; 2] = [PatternId::AimedFan, PatternId::Ring];

const PHASE_TWO: [PatternId; 3] = [
    PatternId::RingWaves,
    PatternId::DelayedBurst,
    PatternId::HomingFan,
];

const PHASE_THREE: [PatternId; 5] = [
    PatternId::CrossBarrage,
    PatternId::DecoyVolley,
    PatternId::WarningBurst,
    PatternId::SpiralStorm,
    PatternId::SlowZones,
];

/// Patterns available in a phase, in rotation order.
pub fn patterns_for(phase: BossPhase) -> &'static [PatternId] {
    match phase {
        BossPhase::One => &PHASE_ONE,
        BossPhase::Two => &PHASE_TWO,
        BossPhase::Three => &PHASE_THREE,
    }
}

/// Number of patterns in a phase's rotation.
pub fn pattern_count(phase: BossPhase) -> usize {
    PHASE_PATTERN_COUNTS[phase.index()]
}

/// Pattern at a rotation index (wraps).
pub fn pattern_at(phase: BossPhase, index: usize) -> PatternId {
    let table = patterns_for(phase);
    table[index % table.len()]
}

/// Rotation index following `index`.
pub fn next_index(phase: BossPhase, index: usize) -> usize {
    (index + 1) % pattern_count(phase)
}
