//! Core types and definitions for the FIRELINE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! weapon configuration, ammunition ledger, components, commands, state
//! snapshots, events, and constants. It has no dependency on the ECS or
//! any runtime framework.

pub mod ammo;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
