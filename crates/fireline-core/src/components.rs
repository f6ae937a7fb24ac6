//! ECS components for shootable target entities.
//!
//! Components are plain data structs; hit-resolution logic lives in the
//! sim crate's systems. Each struct is one capability a struck object may
//! expose, queried once per hit.

use serde::{Deserialize, Serialize};

/// Sphere collider for ray intersection tests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    /// Sphere radius (meters).
    pub radius: f64,
}

/// Receives direct damage from shots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Damageable {
    /// Remaining hit points; the entity is cleaned up at or below zero.
    pub hit_points: f64,
}

/// Responds to impulses. Entities with a `RigidBody` and a `Velocity`
/// are pushed opposite the struck surface normal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RigidBody {
    /// Mass in kilograms; impulse / mass = velocity change.
    pub mass: f64,
}

/// Detonates immediately when struck, regardless of shot damage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExplosiveCharge {
    /// Blast damage radius (meters).
    pub blast_radius: f64,
    /// Damage applied to each damageable inside the blast radius.
    pub blast_damage: f64,
    /// Set when the charge has gone off; detonated charges are inert and
    /// removed by cleanup.
    pub detonated: bool,
}

/// Parent-scoped damage accumulator for an articulated training dummy.
/// Parts carry colliders and route damage here via their ownership chain.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TrainingDummy {
    /// Total damage absorbed across all parts.
    pub damage_taken: f64,
    /// Number of registered part hits.
    pub hits: u32,
}
