//! Boss phase finite state machine.
//!
//! Pure functions that compute the phase from the health fraction and the
//! shield that accompanies every phase transition.

use graze_core::constants::*;
use graze_core::enums::BossPhase;

/// Phase for a health fraction. Thresholds are strict: exactly 70% is phase 2.
pub fn phase_for_fraction(fraction: f32) -> BossPhase {
    if fraction > PHASE_1_THRESHOLD {
        BossPhase::One
    } else if fraction > PHASE_2_THRESHOLD {
        BossPhase::Two
    } else {
        BossPhase::Three
    }
}

/// Time between attacks in a phase.
pub fn attack_interval_ms(phase: BossPhase) -> f32 {
    match phase {
        BossPhase::One => ATTACK_INTERVAL_PHASE_1_MS,
        BossPhase::Two => ATTACK_INTERVAL_PHASE_2_MS,
        BossPhase::Three => ATTACK_INTERVAL_PHASE_3_MS,
    }
}

/// Input to the phase FSM.
pub struct PhaseContext {
    pub last_phase: BossPhase,
    pub health: f32,
    pub max_health: f32,
    pub shield_remaining_ms: f32,
    /// Shield duration granted on a transition.
    pub shield_duration_ms: f32,
}

/// Output from the phase FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseUpdate {
    pub new_phase: BossPhase,
    pub shield_remaining_ms: f32,
    pub phase_changed: bool,
}

/// Evaluate the FSM. Any phase change, in either direction, restarts the shield.
pub fn evaluate(ctx: &PhaseContext) -> PhaseUpdate {
    let fraction = if ctx.max_health > 0.0 {
        ctx.health.max(0.0) / ctx.max_health
    } else {
        0.0
    };
    let new_phase = phase_for_fraction(fraction);

    if new_phase != ctx.last_phase {
        return PhaseUpdate {
            new_phase,
            shield_remaining_ms: ctx.shield_duration_ms,
            phase_changed: true,
        };
    }

    PhaseUpdate {
        new_phase,
        shield_remaining_ms: ctx.shield_remaining_ms,
        phase_changed: false,
    }
}
