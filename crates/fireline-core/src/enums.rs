//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Weapon timing state machine mode.
///
/// The two reload variants are the two phases of the reload process:
/// the stroke (magazine out/in, reload flag raised) and the settle
/// (animation tail, flag already lowered). Both count as "reloading"
/// for gating purposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponMode {
    /// Idle; fire and reload commands are evaluated.
    #[default]
    Ready,
    /// Post-shot cooldown; all commands refused until the deadline.
    Cooling,
    /// Reload phase 1: the reload stroke.
    ReloadStroke,
    /// Reload phase 2: animation settle; refill happens at its deadline.
    ReloadSettle,
}

impl WeaponMode {
    /// True for either reload phase.
    pub fn is_reloading(&self) -> bool {
        matches!(self, WeaponMode::ReloadStroke | WeaponMode::ReloadSettle)
    }
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
