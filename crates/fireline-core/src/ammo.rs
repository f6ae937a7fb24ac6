//! Ammunition ledger — clip and reserve counts with invariant enforcement.
//!
//! Depletion is coupled: firing decrements the clip and the reserve in
//! lockstep, so the reserve counts rounds never yet chambered rather than
//! a separate stockpile. Reload refills copy from the reserve without
//! charging it again.

use serde::{Deserialize, Serialize};

/// Clip and reserve round counts for one weapon.
///
/// Invariants: `in_clip <= clip_size`; both counters are unsigned, so
/// they can never go negative. `reserve` may reach zero while the clip
/// still holds rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoLedger {
    /// Rounds immediately available to fire.
    pub in_clip: u32,
    /// Rounds never yet chambered, depleted in lockstep with the clip.
    pub reserve: u32,
    /// Clip capacity.
    pub clip_size: u32,
}

impl AmmoLedger {
    /// New ledger with a full clip and `clip_size * reserve_multiplier`
    /// rounds of reserve.
    pub fn new(clip_size: u32, reserve_multiplier: u32) -> Self {
        Self {
            in_clip: clip_size,
            reserve: clip_size * reserve_multiplier,
            clip_size,
        }
    }

    /// Consume one round for a shot.
    ///
    /// Returns false and changes nothing if the clip is empty. Otherwise
    /// decrements the clip and the reserve together (the reserve
    /// saturates at zero; it may already be exhausted independently).
    pub fn try_consume_round(&mut self) -> bool {
        if self.in_clip == 0 {
            return false;
        }
        self.in_clip -= 1;
        self.reserve = self.reserve.saturating_sub(1);
        true
    }

    /// Refill the clip from the reserve: `in_clip = min(clip_size, reserve)`.
    /// Returns the new clip count. Safe with zero reserve (refills to 0).
    pub fn refill(&mut self) -> u32 {
        self.in_clip = self.clip_size.min(self.reserve);
        self.in_clip
    }

    /// True iff the clip is empty and a refill would load at least one round.
    pub fn needs_reload(&self) -> bool {
        self.in_clip == 0 && self.reserve > 0
    }

    /// True iff the clip is at capacity.
    pub fn is_full(&self) -> bool {
        self.in_clip == self.clip_size
    }
}
