//! Simulation engine for FIRELINE.
//!
//! Owns the hecs ECS world of shootable targets and the per-weapon state
//! machines, runs systems at a fixed tick rate, and produces SimSnapshots
//! for the frontend.

pub mod engine;
pub mod systems;
pub mod weapon;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use fireline_core as core;
