//! Read-only per-tick input to a [`NavigationPolicy`](crate::NavigationPolicy).

use gn_core::{Position, Threat, Tick};
use gn_grid::Grid;

/// A read-only snapshot of one tick.
///
/// Built by the caller once per tick.  The policy borrows the grid and the
/// threat slice for the duration of the decision and keeps nothing.
#[derive(Clone, Copy, Debug)]
pub struct TickContext<'a> {
    /// Current tick, for logging.
    pub tick: Tick,

    /// The level, including consumables not yet eaten.
    pub grid: &'a Grid,

    /// Agent position.  Wrapped on cyclic grids; must be inside bounded ones.
    pub agent: Position,

    /// Fresh threat snapshots.  Dangerous ones are hard obstacles for the
    /// agent's next step.
    pub threats: &'a [Threat],
}

impl<'a> TickContext<'a> {
    #[inline]
    pub fn new(tick: Tick, grid: &'a Grid, agent: Position, threats: &'a [Threat]) -> Self {
        Self { tick, grid, agent, threats }
    }

    pub fn dangerous_threats(&self) -> impl Iterator<Item = &'a Threat> + 'a {
        self.threats.iter().filter(|t| t.is_dangerous())
    }

    pub fn vulnerable_threats(&self) -> impl Iterator<Item = &'a Threat> + 'a {
        self.threats.iter().filter(|t| t.is_vulnerable())
    }
}
