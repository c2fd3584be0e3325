//! Deterministic per-threat RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each threat gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (threat_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive IDs uniformly across the seed space.  Threat
//! walks therefore do not depend on the order in which threats are stepped,
//! and adding a threat does not disturb the streams of existing ones.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::ThreatId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── ThreatRng ─────────────────────────────────────────────────────────────────

/// Per-threat deterministic RNG.
#[derive(Clone, Debug)]
pub struct ThreatRng(SmallRng);

impl ThreatRng {
    /// Seed deterministically from the game's global seed and a threat ID.
    pub fn new(global_seed: u64, threat: ThreatId) -> Self {
        let seed = global_seed ^ (threat.0 as u64).wrapping_mul(MIXING_CONSTANT);
        ThreatRng(SmallRng::seed_from_u64(seed))
    }

    /// Choose a random element from a non-empty slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
