//! Per-tick threat snapshots.

use crate::{Position, ThreatId};

/// A mobile threat as seen by the decision policy for one tick.
///
/// Threats are rebuilt by the caller every tick; the core keeps no threat
/// state between ticks.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Threat {
    pub id: ThreatId,
    pub pos: Position,
    /// Remaining vulnerability time in game time units.  `> 0` means the
    /// threat is harmless and may be chased; `<= 0` means it is dangerous.
    pub vulnerable_remaining: f64,
}

impl Threat {
    #[inline]
    pub fn new(id: ThreatId, pos: Position, vulnerable_remaining: f64) -> Self {
        Self { id, pos, vulnerable_remaining }
    }

    /// A threat that is currently dangerous.
    #[inline]
    pub fn dangerous(id: ThreatId, pos: Position) -> Self {
        Self::new(id, pos, 0.0)
    }

    #[inline]
    pub fn is_dangerous(&self) -> bool {
        self.vulnerable_remaining <= 0.0
    }

    #[inline]
    pub fn is_vulnerable(&self) -> bool {
        !self.is_dangerous()
    }
}
