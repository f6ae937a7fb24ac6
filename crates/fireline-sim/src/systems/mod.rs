//! Per-tick systems. Each module exposes a `run()` invoked by the engine
//! in a fixed order: weapon, movement, cleanup, then snapshot.

pub mod cleanup;
pub mod hit;
pub mod movement;
pub mod snapshot;
pub mod weapon;

use fireline_core::events::{Alert, AnimationEvent, AudioEvent, EffectRequest, HudUpdate};

/// Frame-scoped event queues drained into each snapshot.
#[derive(Debug, Default)]
pub struct EventSinks {
    pub audio: Vec<AudioEvent>,
    pub animation: Vec<AnimationEvent>,
    pub effects: Vec<EffectRequest>,
    pub hud: Vec<HudUpdate>,
    pub alerts: Vec<Alert>,
}
