//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Weapon timing ---

/// Fixed animation-settle buffer (seconds).
/// Appended to the cooldown interval and carved out of the end of the
/// reload stroke so the reload animation flag clears before the refill.
pub const ANIMATION_TAIL_SECS: f64 = 0.25;

// --- Effects ---

/// Lifetime requested for transient spawned effects (muzzle flashes,
/// impact effects). Disposal is the effect collaborator's job.
pub const EFFECT_LIFETIME_SECS: f64 = 5.0;

// --- Hit resolution ---

/// Minimum ray parameter accepted as a hit, rejecting self-intersections
/// at the ray origin.
pub const RAY_EPSILON: f64 = 1e-9;

/// Maximum ownership-chain depth walked when routing part damage to a
/// parent training dummy.
pub const PART_CHAIN_MAX_DEPTH: usize = 8;

// --- Weapon defaults ---

/// Default damage per round.
pub const DEFAULT_DAMAGE: f64 = 10.0;

/// Default maximum ray range (meters).
pub const DEFAULT_RANGE: f64 = 100.0;

/// Default fire rate for automatic weapons (rounds/second).
pub const DEFAULT_FIRE_RATE: f64 = 15.0;

/// Default impulse magnitude applied to struck rigid bodies.
pub const DEFAULT_IMPACT_FORCE: f64 = 30.0;

/// Default clip capacity (rounds).
pub const DEFAULT_CLIP_SIZE: u32 = 10;

/// Default reserve multiplier (reserve = clip size x multiplier).
pub const DEFAULT_RESERVE_MULTIPLIER: u32 = 3;

/// Default reload duration (seconds), animation tail included.
pub const DEFAULT_RELOAD_SECS: f64 = 1.0;

/// Default post-shot cooldown (seconds), before the animation tail.
pub const DEFAULT_COOLDOWN_SECS: f64 = 0.25;
