//! Weapon instance record — one interleaved timing state machine.
//!
//! Stored in `SimulationEngine`'s weapon map, NOT as ECS entities; the
//! ECS world holds only shootable targets. Exactly one system mutates a
//! given weapon per tick.

use glam::DVec3;

use fireline_core::ammo::AmmoLedger;
use fireline_core::config::WeaponConfig;
use fireline_core::enums::WeaponMode;
use fireline_core::types::Position;

/// Runtime state for one registered weapon.
#[derive(Debug, Clone)]
pub struct WeaponState {
    pub id: u32,
    pub config: WeaponConfig,
    pub ammo: AmmoLedger,

    // --- Timing ---
    /// Current state machine mode.
    pub mode: WeaponMode,
    /// Tick at which the current mode started; deadlines are checked as
    /// elapsed seconds since this tick.
    pub mode_started_tick: u64,
    /// Earliest time the next automatic shot is honored (elapsed secs).
    pub next_fire_at_secs: f64,

    // --- Buffered input ---
    /// Holstered weapons are skipped by the controller entirely.
    pub active: bool,
    /// Current trigger level.
    pub trigger_held: bool,
    /// Trigger pressed this tick (released -> held transition); visible
    /// for exactly one tick.
    pub trigger_edge: bool,
    /// Manual reload requested this tick.
    pub reload_requested: bool,

    // --- Aim ray ---
    pub aim_origin: Position,
    /// Unit aim direction.
    pub aim_direction: DVec3,
}

impl WeaponState {
    pub fn new(id: u32, config: WeaponConfig) -> Self {
        let ammo = AmmoLedger::new(config.clip_size, config.reserve_multiplier);
        Self {
            id,
            config,
            ammo,
            mode: WeaponMode::Ready,
            mode_started_tick: 0,
            next_fire_at_secs: 0.0,
            active: true,
            trigger_held: false,
            trigger_edge: false,
            reload_requested: false,
            aim_origin: Position::default(),
            aim_direction: DVec3::X,
        }
    }

    /// Force the state machine back to Ready, discarding any in-flight
    /// reload or cooldown. Invoked on weapon activation; ammunition is
    /// untouched (a discarded reload never refills).
    pub fn reset(&mut self, now_tick: u64) {
        self.mode = WeaponMode::Ready;
        self.mode_started_tick = now_tick;
        self.next_fire_at_secs = 0.0;
        self.trigger_held = false;
        self.trigger_edge = false;
        self.reload_requested = false;
    }
}

/// Running range tally tracked by the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeScore {
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub targets_destroyed: u32,
}
