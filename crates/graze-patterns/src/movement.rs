//! Boss roaming: random targets near the top-centre and a proportional approach.

use rand::Rng;

use graze_core::constants::{BOSS_ROAM_HALF_HEIGHT, BOSS_ROAM_HALF_WIDTH};
use graze_core::types::{Arena, Vec2};

/// Pick a roaming target inside the box centred at (w/2, h/3).
pub fn pick_roam_target<R: Rng>(arena: Arena, rng: &mut R) -> Vec2 {
    let anchor = Vec2::new(arena.width / 2.0, arena.height / 3.0);
    anchor
        + Vec2::new(
            rng.gen_range(-BOSS_ROAM_HALF_WIDTH..BOSS_ROAM_HALF_WIDTH),
            rng.gen_range(-BOSS_ROAM_HALF_HEIGHT..BOSS_ROAM_HALF_HEIGHT),
        )
}

/// Velocity (units/s) toward `target`, proportional to the remaining distance.
/// The boss slows as it closes in and never overshoots at sane tick lengths.
pub fn roam_velocity(position: Vec2, target: Vec2, move_speed: f32) -> Vec2 {
    (target - position) * move_speed * 0.01
}
