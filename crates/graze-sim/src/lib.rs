//! Headless match simulation for GRAZE.
//!
//! Owns the projectile pool, player and boss controllers, the release
//! scheduler and the collision resolver, runs them at a fixed tick order,
//! and produces `FrameSnapshot`s for the host.

pub mod boss;
pub mod collision;
pub mod engine;
pub mod player;
pub mod pool;
pub mod release;
pub mod scheduler;
pub mod snapshot;

pub use engine::{MatchEngine, SimConfig};
pub use graze_core as core;
