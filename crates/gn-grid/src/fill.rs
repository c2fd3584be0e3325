//! Flood fill.
//!
//! Recolors the 4-connected region that shares the start cell's original
//! code.  Uses an explicit work-list, so region size is bounded only by the
//! heap, never by the call stack.

use gn_core::{CellCode, Position};
use tracing::trace;

use crate::{Grid, GridResult};

impl Grid {
    /// Flood-fill from `start` with `new_value`, returning the number of
    /// repainted cells.
    ///
    /// `start` is wrapped on a cyclic grid and must be inside a bounded one.
    /// Returns `Ok(0)` without touching the grid when the start cell already
    /// holds `new_value`.
    pub fn fill(&mut self, start: Position, new_value: CellCode) -> GridResult<usize> {
        let start = self.normalize(start)?;
        let old = self.cell(start);
        if old == new_value {
            return Ok(0);
        }

        // Cells are painted when pushed, so each is pushed at most once.
        let mut stack = vec![start];
        *self.cell_mut(start) = new_value;
        let mut painted = 1usize;

        while let Some(p) = stack.pop() {
            for n in self.neighbors(p) {
                if self.cell(n) == old {
                    *self.cell_mut(n) = new_value;
                    painted += 1;
                    stack.push(n);
                }
            }
        }

        trace!(%start, from = %old, to = %new_value, painted, "flood fill");
        Ok(painted)
    }
}
