//! Decision output types.

use std::fmt;

use gn_core::Direction;

use crate::AgentMemory;

// ── Mode ──────────────────────────────────────────────────────────────────────

/// Policy state for one tick.  Re-evaluated from scratch every tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Collect consumables.
    #[default]
    Forage,
    /// A dangerous threat is close; maximize distance.
    Escape,
    /// A vulnerable threat can be caught before its timer runs out.
    ChaseVulnerable,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Forage          => "forage",
            Mode::Escape          => "escape",
            Mode::ChaseVulnerable => "chase",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Reason ────────────────────────────────────────────────────────────────────

/// Which rung of the decision ladder produced the direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reason {
    /// The active mode's scoring picked the move.
    #[default]
    Scored,
    /// The agent was stuck while safe; forced progress toward a consumable.
    StagnationOverride,
    /// Scoring produced nothing; any legal move was taken.
    Fallback,
    /// No legal move existed; the agent stays.
    NoLegalMove,
    /// The policy never moves.
    Idle,
}

impl Reason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Reason::Scored             => "scored",
            Reason::StagnationOverride => "stagnation",
            Reason::Fallback           => "fallback",
            Reason::NoLegalMove        => "no_legal_move",
            Reason::Idle               => "idle",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Decision ──────────────────────────────────────────────────────────────────

/// One tick's output: the direction plus the memory to pass next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub direction: Direction,
    pub mode:      Mode,
    pub reason:    Reason,
    pub memory:    AgentMemory,
}
