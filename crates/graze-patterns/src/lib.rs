//! Boss behaviour for GRAZE.
//!
//! Implements the boss phase state machine, the per-phase attack repertoire,
//! and the pattern generators that turn an attack into spawn orders.
//! No simulation dependency. Operates on plain data; randomness comes in
//! through a caller-supplied `rand::Rng`.

pub mod generators;
pub mod movement;
pub mod orders;
pub mod phase;
pub mod repertoire;

pub use graze_core as core;

#[cfg(test)]
mod tests;
