//! Breadth-first distance fields.
//!
//! A [`DistanceField`] holds one hop count per cell, or [`UNREACHABLE`] for
//! cells no source can reach.  Both the single-source
//! [`Grid::all_distances`] and the multi-source
//! [`DistanceFieldBuilder`](crate::DistanceFieldBuilder) run the same
//! [`breadth_first`] kernel.

use std::collections::VecDeque;

use gn_core::{CellCode, Position};

use crate::{Grid, GridError, GridResult};

/// Sentinel stored for unreached cells.
pub const UNREACHABLE: i32 = -1;

// ── DistanceField ─────────────────────────────────────────────────────────────

/// Grid-shaped hop counts to the nearest source.
///
/// The field remembers the geometry it was built on so lookups normalize
/// positions the same way the traversal did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceField {
    width:  i32,
    height: i32,
    cyclic: bool,
    dist:   Vec<i32>,
}

impl DistanceField {
    fn unreached(grid: &Grid) -> Self {
        Self {
            width:  grid.width(),
            height: grid.height(),
            cyclic: grid.is_cyclic(),
            dist:   vec![UNREACHABLE; grid.cell_count()],
        }
    }

    #[inline]
    pub fn dims(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Hop count at `pos`, or `None` if unreached.
    ///
    /// Wraps `pos` when the field was built on a cyclic grid; positions
    /// outside a bounded field read as unreached.
    pub fn get(&self, pos: Position) -> Option<u32> {
        let d = self.raw(pos);
        (d >= 0).then_some(d as u32)
    }

    /// Stored value at `pos`: a hop count or [`UNREACHABLE`].
    pub fn raw(&self, pos: Position) -> i32 {
        match self.slot(pos) {
            Some(i) => self.dist[i],
            None    => UNREACHABLE,
        }
    }

    /// Hop count at `pos` clamped to `horizon`.  Unreached cells read as
    /// `horizon`, so far and unreachable compare identically.
    pub fn clamped(&self, pos: Position, horizon: u32) -> u32 {
        self.get(pos).map_or(horizon, |d| d.min(horizon))
    }

    #[inline]
    pub fn is_reachable(&self, pos: Position) -> bool {
        self.raw(pos) >= 0
    }

    /// Number of reached cells.
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|&&d| d >= 0).count()
    }

    /// Largest finite hop count, if any cell was reached.
    pub fn max_distance(&self) -> Option<u32> {
        self.dist.iter().copied().filter(|&d| d >= 0).max().map(|d| d as u32)
    }

    /// Column-major copy (`matrix[x][y]`) of the raw values.
    pub fn to_matrix(&self) -> Vec<Vec<i32>> {
        (0..self.width)
            .map(|x| (0..self.height).map(|y| self.dist[(y * self.width + x) as usize]).collect())
            .collect()
    }

    fn slot(&self, pos: Position) -> Option<usize> {
        let p = if self.cyclic {
            pos.wrapped(self.width, self.height)
        } else if pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height {
            pos
        } else {
            return None;
        };
        Some((p.y * self.width + p.x) as usize)
    }

    #[inline]
    pub(crate) fn set(&mut self, grid: &Grid, pos: Position, d: i32) {
        let i = grid.index(pos);
        self.dist[i] = d;
    }
}

// ── BFS kernel ────────────────────────────────────────────────────────────────

/// Multi-source BFS over `grid`.
///
/// Every seed enters the queue at distance 0 before expansion begins.
/// Seeds must already be normalized; blocked and duplicate seeds are
/// skipped.  Neighbors expand in the grid's scan order, wrapping only on
/// cyclic grids.
pub(crate) fn breadth_first<F, I>(grid: &Grid, blocked: F, seeds: I) -> DistanceField
where
    F: Fn(CellCode) -> bool,
    I: IntoIterator<Item = Position>,
{
    let mut field = DistanceField::unreached(grid);
    let mut queue = VecDeque::new();

    for s in seeds {
        if blocked(grid.cell(s)) || field.raw(s) != UNREACHABLE {
            continue;
        }
        field.set(grid, s, 0);
        queue.push_back(s);
    }

    while let Some(p) = queue.pop_front() {
        let next = field.raw(p) + 1;
        for n in grid.neighbors(p) {
            if field.raw(n) == UNREACHABLE && !blocked(grid.cell(n)) {
                field.set(grid, n, next);
                queue.push_back(n);
            }
        }
    }

    field
}

// ── Grid::all_distances ───────────────────────────────────────────────────────

impl Grid {
    /// Single-source BFS from `start`; cells equal to `obstacle` are
    /// impassable.
    ///
    /// `start` wraps on a cyclic grid and must be inside a bounded one.  If
    /// the start cell is itself an obstacle every cell is unreachable.
    pub fn all_distances(&self, start: Position, obstacle: CellCode) -> GridResult<DistanceField> {
        let start = self.normalize(start)?;
        Ok(breadth_first(self, |c| c == obstacle, [start]))
    }

    /// [`all_distances`](Self::all_distances) for callers whose start may be
    /// absent.  `None` fails with [`GridError::NullStart`].
    pub fn all_distances_from(
        &self,
        start: Option<Position>,
        obstacle: CellCode,
    ) -> GridResult<DistanceField> {
        let start = start.ok_or(GridError::NullStart)?;
        self.all_distances(start, obstacle)
    }
}
