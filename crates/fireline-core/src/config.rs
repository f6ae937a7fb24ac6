//! Per-weapon configuration, immutable after registration.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Static parameters for one weapon instance.
///
/// Sound and effect identifiers are opaque strings owned by the frontend
/// collaborators; an empty identifier means the corresponding event is
/// never emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponConfig {
    /// Damage applied per round to damageable targets.
    pub damage: f64,
    /// Maximum hit-resolution ray range (meters).
    pub range: f64,
    /// Impulse magnitude applied opposite the struck surface normal.
    pub impact_force: f64,
    /// Automatic weapons fire while the trigger is held, rate-limited by
    /// elapsed time; manual weapons fire on trigger press edges only.
    pub automatic: bool,
    /// Rounds per second; meaningful only when `automatic`.
    pub fire_rate: f64,
    /// Clip capacity.
    pub clip_size: u32,
    /// Reserve = clip_size * reserve_multiplier at registration.
    pub reserve_multiplier: u32,
    /// Total reload duration in seconds (the animation tail is carved out
    /// of its end, not added to it).
    pub reload_secs: f64,
    /// Post-shot cooldown in seconds; the animation tail is added on top.
    pub cooldown_secs: f64,

    // --- Collaborator identifiers ---
    /// Sound played for each shot.
    pub gunshot_sound: String,
    /// Sound played when the reload stroke begins.
    pub reload_sound: String,
    /// Sound played when the reload settle begins.
    pub reload_end_sound: String,
    /// Sound played when the cooldown begins.
    pub cooldown_sound: String,
    /// Transient effect spawned at the muzzle on each shot.
    pub muzzle_flash_effect: String,
    /// Catalog of impact effects; one is chosen uniformly at random per
    /// hit. May be empty.
    pub impact_effects: Vec<String>,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            damage: DEFAULT_DAMAGE,
            range: DEFAULT_RANGE,
            impact_force: DEFAULT_IMPACT_FORCE,
            automatic: false,
            fire_rate: DEFAULT_FIRE_RATE,
            clip_size: DEFAULT_CLIP_SIZE,
            reserve_multiplier: DEFAULT_RESERVE_MULTIPLIER,
            reload_secs: DEFAULT_RELOAD_SECS,
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
            gunshot_sound: "gunshot".to_string(),
            reload_sound: String::new(),
            reload_end_sound: String::new(),
            cooldown_sound: String::new(),
            muzzle_flash_effect: String::new(),
            impact_effects: Vec::new(),
        }
    }
}
