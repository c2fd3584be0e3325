//! Plain data row types written by output backends.

use gn_core::Direction;
use gn_policy::{Mode, Reason};
use gn_sim::GameStatus;

/// One policy decision, taken from `(x, y)` at `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionRow {
    pub tick:      u64,
    pub x:         i32,
    pub y:         i32,
    pub direction: Direction,
    pub mode:      Mode,
    pub reason:    Reason,
}

/// Game state at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRow {
    pub tick:      u64,
    pub score:     u64,
    /// Dots plus power items still on the grid.
    pub dots_left: usize,
    pub status:    GameStatus,
}
