//! Multi-source distance fields.
//!
//! One BFS pass per field: every source is enqueued at distance 0 before any
//! expansion, so each cell ends up holding the hop count to its nearest
//! source.  The result depends only on the grid and the source *set*, never
//! on the order sources were supplied in.

use gn_core::{CellCode, Position};

use crate::distance::breadth_first;
use crate::{DistanceField, Grid, GridResult};

/// Builds nearest-source distance fields over a borrowed grid.
///
/// The blocked predicate defaults to [`CellCode::is_wall`].
pub struct DistanceFieldBuilder<'g, F = fn(CellCode) -> bool> {
    grid:    &'g Grid,
    blocked: F,
}

impl<'g> DistanceFieldBuilder<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid, blocked: CellCode::is_wall }
    }
}

impl<'g, F: Fn(CellCode) -> bool> DistanceFieldBuilder<'g, F> {
    /// Replace the blocked predicate.
    pub fn with_blocked<G: Fn(CellCode) -> bool>(self, blocked: G) -> DistanceFieldBuilder<'g, G> {
        DistanceFieldBuilder { grid: self.grid, blocked }
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Distance to the nearest cell holding `target`.
    pub fn nearest_code(&self, target: CellCode) -> DistanceField {
        self.nearest_matching(|c| c == target)
    }

    /// Distance to the nearest cell whose code satisfies `pred`.
    pub fn nearest_matching<P: Fn(CellCode) -> bool>(&self, pred: P) -> DistanceField {
        let grid = self.grid;
        let seeds = grid.positions().filter(|&p| pred(grid.cell(p)));
        breadth_first(grid, &self.blocked, seeds)
    }

    /// Distance to the nearest of `sources` (e.g. threat positions).
    ///
    /// Sources wrap on a cyclic grid; on a bounded grid an outside source is
    /// an error.
    pub fn nearest_positions<I>(&self, sources: I) -> GridResult<DistanceField>
    where
        I: IntoIterator<Item = Position>,
    {
        let seeds = sources
            .into_iter()
            .map(|p| self.grid.normalize(p))
            .collect::<GridResult<Vec<_>>>()?;
        Ok(breadth_first(self.grid, &self.blocked, seeds))
    }
}
