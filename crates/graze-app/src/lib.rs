//! GRAZE host.
//!
//! Wires the simulation, the leaderboard and a scripted pilot together: a
//! game-loop thread for real-time runs, an unthrottled session runner, and
//! the `graze` binary on top of both.

pub mod autopilot;
pub mod game_loop;
pub mod session;
pub mod state;

pub use graze_core as core;
