//! Events emitted by the simulation for the audio, animation, effect,
//! and HUD collaborators. All fire-and-forget: a frontend that ignores a
//! queue loses nothing but the feedback.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::AlertLevel;
use crate::types::Position;

/// Audio events for the frontend sound system. Variants carrying a sound
/// id are only emitted when the configured id is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A round was fired.
    Gunshot { weapon_id: u32, sound: String },
    /// The reload stroke began.
    ReloadStart { weapon_id: u32, sound: String },
    /// The reload settle began.
    ReloadEnd { weapon_id: u32, sound: String },
    /// The post-shot cooldown began.
    CooldownStart { weapon_id: u32, sound: String },
    /// An explosive charge went off.
    Detonation { position: Position },
}

/// Trigger signals for the frontend animation controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnimationEvent {
    /// The reloading flag changed (raised at stroke entry, lowered at
    /// settle entry and on weapon activation).
    ReloadingChanged { weapon_id: u32, reloading: bool },
    /// One-shot cooldown trigger.
    CoolingTriggered { weapon_id: u32 },
}

/// Request to spawn a transient effect (muzzle flash, impact effect).
/// The spawner owns the effect's lifecycle and disposes of it after
/// `lifetime_secs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectRequest {
    /// Opaque effect identifier from the weapon config.
    pub effect: String,
    pub position: Position,
    /// Orientation normal (surface normal at an impact, aim direction at
    /// the muzzle).
    pub normal: DVec3,
    pub lifetime_secs: f64,
}

/// Ammunition counter refresh for the HUD display collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HudUpdate {
    pub weapon_id: u32,
    pub in_clip: u32,
    pub reserve: u32,
}

/// Alert for the UI alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
