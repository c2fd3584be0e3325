//! Shortest-path reconstruction.

use gn_core::{CellCode, Direction, Position};
use tracing::error;

use crate::{DistanceField, Grid, GridError, GridResult};

// ── GridPath ──────────────────────────────────────────────────────────────────

/// Cells from start to end inclusive; consecutive cells are 4-neighbors
/// (wrap-aware on cyclic grids).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPath {
    cells: Vec<Position>,
}

impl GridPath {
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Number of moves, one less than the number of cells.
    pub fn hops(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    /// Path of a single cell: start and end coincide.
    pub fn is_trivial(&self) -> bool {
        self.cells.len() == 1
    }

    /// The cell one move along the path, if the path moves at all.
    pub fn first_step(&self) -> Option<Position> {
        self.cells.get(1).copied()
    }

    /// Direction of the first move as seen on `grid`.
    pub fn first_direction(&self, grid: &Grid) -> Option<Direction> {
        let from = self.start()?;
        let to = self.first_step()?;
        Direction::MOVES.into_iter().find(|&d| grid.step(from, d) == Some(to))
    }

    pub fn into_vec(self) -> Vec<Position> {
        self.cells
    }
}

// ── Grid::shortest_path ───────────────────────────────────────────────────────

impl Grid {
    /// Shortest path from `p1` to `p2` avoiding cells equal to `obstacle`.
    ///
    /// Returns `Ok(None)` when either endpoint is an obstacle or `p2` is
    /// unreachable.  Endpoints are normalized like every other algorithm
    /// input.
    pub fn shortest_path(
        &self,
        p1: Position,
        p2: Position,
        obstacle: CellCode,
    ) -> GridResult<Option<GridPath>> {
        let p1 = self.normalize(p1)?;
        let p2 = self.normalize(p2)?;
        if self.cell(p1) == obstacle || self.cell(p2) == obstacle {
            return Ok(None);
        }
        let field = self.all_distances(p1, obstacle)?;
        if !field.is_reachable(p2) {
            return Ok(None);
        }
        self.path_in_field(&field, p2).map(Some)
    }

    /// Walk back from `target` through a single-source `field`, choosing the
    /// first neighbor in scan order whose distance is exactly one less.
    ///
    /// Returns the path source-first.  An unreachable target yields
    /// [`GridError::PathReconstructionInconsistency`] just like a broken
    /// field does.
    pub fn path_in_field(&self, field: &DistanceField, target: Position) -> GridResult<GridPath> {
        let target = self.normalize(target)?;
        let mut d = field.raw(target);
        if d < 0 {
            error!(at = %target, "path target is unreachable in distance field");
            return Err(GridError::PathReconstructionInconsistency { at: target, expected: 0 });
        }

        let mut cells = Vec::with_capacity(d as usize + 1);
        let mut cur = target;
        cells.push(cur);
        while d > 0 {
            let expected = d - 1;
            let Some(prev) = self.neighbors(cur).find(|&n| field.raw(n) == expected) else {
                error!(at = %cur, expected, "distance field has no predecessor");
                return Err(GridError::PathReconstructionInconsistency { at: cur, expected });
            };
            cells.push(prev);
            cur = prev;
            d = expected;
        }
        cells.reverse();
        Ok(GridPath { cells })
    }
}

// ── Textual start adapter ─────────────────────────────────────────────────────

/// Parse an optional `"x,y"` start position.
///
/// `None` and blank input fail with [`GridError::NullStart`]; malformed
/// text fails with the core parse error.
pub fn parse_start(text: Option<&str>) -> GridResult<Position> {
    match text {
        Some(s) if !s.trim().is_empty() => Ok(s.parse::<Position>()?),
        _ => Err(GridError::NullStart),
    }
}
