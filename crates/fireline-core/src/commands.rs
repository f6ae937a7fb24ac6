//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Commands
//! referencing an unknown weapon id are dropped silently.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Report the trigger level for a weapon. The engine derives the
    /// press edge (released -> held) that manual weapons fire on.
    SetTriggerHeld { weapon_id: u32, held: bool },

    /// Request a manual reload this tick. Honored only when the weapon is
    /// Ready, the clip is not full, and reserve remains.
    RequestReload { weapon_id: u32 },

    /// Update the aim ray for a weapon (from the external camera or
    /// transform). The direction is normalized on receipt; a zero
    /// direction is ignored.
    SetAim {
        weapon_id: u32,
        origin: Position,
        direction: DVec3,
    },

    /// Activate or holster a weapon. Activation resets the timing state
    /// to Ready, discarding any in-flight reload or cooldown.
    SetWeaponActive { weapon_id: u32, active: bool },
}
