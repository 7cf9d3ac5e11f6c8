//! Scripted pilots that drive a match from its snapshots.

use graze_core::commands::ControlInput;
use graze_core::state::{FrameSnapshot, ProjectileView};
use graze_core::types::Vec2;
use graze_core::upgrades::UpgradeKind;

/// Radius inside which projectiles are treated as threats.
const THREAT_RADIUS: f32 = 70.0;
/// A threat this close triggers an evasive dash.
const PANIC_RADIUS: f32 = 28.0;
/// Distance to the boss at which an unshielded boss gets rammed.
const RAM_RANGE: f32 = 160.0;
/// Preferred hover offset below the boss.
const HOVER_OFFSET: Vec2 = Vec2::new(0.0, 150.0);

pub trait Pilot {
    fn id(&self) -> &'static str;
    fn reset(&mut self);
    fn next_input(&mut self, snapshot: &FrameSnapshot) -> ControlInput;
    fn choose_upgrade(&mut self, snapshot: &FrameSnapshot) -> UpgradeKind;
}

/// Dodges nearby projectiles, hovers under the boss, and rams it whenever
/// the shield is down and the dash is ready.
#[derive(Debug, Default)]
pub struct DodgePilot {
    dash_held: bool,
    upgrades_taken: usize,
}

impl DodgePilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dash is edge-triggered, so a held button is released for one frame
    /// before it can fire again.
    fn press_dash(&mut self, input: &mut ControlInput) {
        input.dash = !self.dash_held;
        self.dash_held = input.dash;
    }
}

impl Pilot for DodgePilot {
    fn id(&self) -> &'static str {
        "dodge"
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn next_input(&mut self, snapshot: &FrameSnapshot) -> ControlInput {
        let me = snapshot.player.position;
        let dash_ready = snapshot.stats.dash_cooldown_remaining_ms <= 0.0;

        let threats: Vec<&ProjectileView> = snapshot
            .projectiles
            .iter()
            .filter(|p| !p.fake && p.position.distance(me) < THREAT_RADIUS)
            .collect();

        if !threats.is_empty() {
            let away = threats
                .iter()
                .fold(Vec2::ZERO, |acc, p| acc + (me - p.position));
            let nearest = threats
                .iter()
                .map(|p| p.position.distance(me))
                .fold(f32::INFINITY, f32::min);

            let mut input = ControlInput {
                horizontal: axis(away.x),
                vertical: axis(away.y),
                ..Default::default()
            };
            if nearest < PANIC_RADIUS && dash_ready {
                input.aim = me + away.normalize_or_zero() * 100.0;
                self.press_dash(&mut input);
            } else {
                self.dash_held = false;
            }
            return input;
        }

        let boss = snapshot.boss.position;
        if !snapshot.boss.shielded && dash_ready && boss.distance(me) < RAM_RANGE {
            let mut input = ControlInput::aiming_at(boss);
            self.press_dash(&mut input);
            return input;
        }

        self.dash_held = false;
        ControlInput::aiming_at(boss + HOVER_OFFSET)
    }

    fn choose_upgrade(&mut self, _snapshot: &FrameSnapshot) -> UpgradeKind {
        let kind = UpgradeKind::ALL[self.upgrades_taken % UpgradeKind::ALL.len()];
        self.upgrades_taken += 1;
        kind
    }
}

fn axis(v: f32) -> i8 {
    if v > 0.5 {
        1
    } else if v < -0.5 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graze_core::enums::Tint;

    fn snapshot_with(player: Vec2, boss: Vec2) -> FrameSnapshot {
        let mut snap = FrameSnapshot::default();
        snap.player.position = player;
        snap.boss.position = boss;
        snap.boss.shielded = true;
        snap
    }

    fn shot(position: Vec2) -> ProjectileView {
        ProjectileView {
            position,
            tint: Tint::DEFAULT,
            fake: false,
            armed: false,
        }
    }

    #[test]
    fn test_steers_away_from_threat() {
        let mut pilot = DodgePilot::new();
        let mut snap = snapshot_with(Vec2::new(400.0, 500.0), Vec2::new(400.0, 150.0));
        snap.projectiles.push(shot(Vec2::new(360.0, 460.0)));

        let input = pilot.next_input(&snap);
        assert_eq!(input.horizontal, 1);
        assert_eq!(input.vertical, 1);
        assert!(!input.aim_active);
        assert!(!input.dash);
    }

    #[test]
    fn test_fake_projectiles_are_ignored() {
        let mut pilot = DodgePilot::new();
        let mut snap = snapshot_with(Vec2::new(400.0, 500.0), Vec2::new(400.0, 150.0));
        snap.projectiles.push(ProjectileView {
            fake: true,
            ..shot(Vec2::new(395.0, 495.0))
        });

        let input = pilot.next_input(&snap);
        assert!(input.aim_active);
        assert_eq!(input.aim, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_panic_dash_is_edge_triggered() {
        let mut pilot = DodgePilot::new();
        let mut snap = snapshot_with(Vec2::new(400.0, 500.0), Vec2::new(400.0, 150.0));
        snap.projectiles.push(shot(Vec2::new(390.0, 500.0)));

        assert!(pilot.next_input(&snap).dash);
        assert!(!pilot.next_input(&snap).dash);
        assert!(pilot.next_input(&snap).dash);
    }

    #[test]
    fn test_rams_unshielded_boss_in_range() {
        let mut pilot = DodgePilot::new();
        let mut snap = snapshot_with(Vec2::new(400.0, 300.0), Vec2::new(400.0, 200.0));
        snap.boss.shielded = false;

        let input = pilot.next_input(&snap);
        assert!(input.dash);
        assert_eq!(input.aim, Vec2::new(400.0, 200.0));

        // Not while the dash is cooling down.
        pilot.reset();
        snap.stats.dash_cooldown_remaining_ms = 400.0;
        assert!(!pilot.next_input(&snap).dash);
    }

    #[test]
    fn test_upgrades_cycle_through_catalogue() {
        let mut pilot = DodgePilot::new();
        let snap = FrameSnapshot::default();
        let picks: Vec<_> = (0..6).map(|_| pilot.choose_upgrade(&snap)).collect();
        assert_eq!(&picks[..5], &UpgradeKind::ALL[..]);
        assert_eq!(picks[5], UpgradeKind::DashCooldown);
    }
}
