//! Core types and definitions for the GRAZE boss-fight simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry helpers, commands, state snapshots, events, tunables, and constants.
//! It has no dependency on any rendering or runtime framework.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
pub mod upgrades;
