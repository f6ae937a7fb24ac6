//! Simulation snapshot — the complete visible state sent to the frontend
//! each tick, plus the event queues drained that tick.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponMode;
use crate::events::{Alert, AnimationEvent, AudioEvent, EffectRequest, HudUpdate};
use crate::types::{Position, SimTime};

/// Complete simulation state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub weapons: Vec<WeaponView>,
    pub targets: Vec<TargetView>,
    pub score: ScoreView,
    pub audio_events: Vec<AudioEvent>,
    pub animation_events: Vec<AnimationEvent>,
    pub effect_requests: Vec<EffectRequest>,
    pub hud_updates: Vec<HudUpdate>,
    pub alerts: Vec<Alert>,
}

/// One weapon's visible state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponView {
    pub weapon_id: u32,
    pub mode: WeaponMode,
    pub active: bool,
    pub in_clip: u32,
    pub reserve: u32,
    pub clip_size: u32,
}

/// One shootable target's visible state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetView {
    /// hecs entity id.
    pub id: u32,
    pub position: Position,
    /// Remaining hit points, if the target is damageable.
    pub hit_points: Option<f64>,
    /// Accumulated dummy damage, if the target is a training dummy.
    pub dummy_damage: Option<f64>,
}

/// Running range tally for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub targets_destroyed: u32,
}
