//! Grid storage and coordinate handling.
//!
//! # Data layout
//!
//! Cells are stored row-major in one flat `Vec<CellCode>`:
//!
//! ```text
//! cells[ y * width + x ]
//! ```
//!
//! Matrices crossing the API boundary ([`Grid::from_matrix`],
//! [`Grid::to_matrix`]) use the column-major `matrix[x][y]` layout that level
//! files and callers work in.
//!
//! # Neighbor scan order
//!
//! Every traversal in this crate visits neighbors in the fixed order
//! `+x, -x, +y, -y`.  Distance values do not depend on it, but path
//! reconstruction's first-match tie-break does, which keeps paths
//! deterministic.

use gn_core::{CellCode, Direction, Position};

use crate::{GridError, GridResult};

/// Neighbor scan order shared by fill, BFS and path reconstruction.
pub(crate) const NEIGHBOR_SCAN: [Direction; 4] =
    [Direction::Right, Direction::Left, Direction::Up, Direction::Down];

// ── Grid ──────────────────────────────────────────────────────────────────────

/// A rectangular matrix of cell codes with an optional toroidal topology.
///
/// The grid exclusively owns its buffer.  Field builders and the decision
/// policy borrow it read-only for the duration of a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width:  i32,
    height: i32,
    cyclic: bool,
    cells:  Vec<CellCode>,
}

impl Grid {
    /// A `width × height` bounded grid filled with `fill`.
    pub fn new(width: i32, height: i32, fill: CellCode) -> GridResult<Self> {
        let len = checked_len(width, height)?;
        Ok(Self { width, height, cyclic: false, cells: vec![fill; len] })
    }

    /// Deep-copy a column-major matrix (`matrix[x][y]`) into a bounded grid.
    ///
    /// Fails with [`GridError::NullOrEmptyInput`] if the matrix or its first
    /// column is empty, and [`GridError::RaggedInput`] if any column's length
    /// differs from the first column's.
    pub fn from_matrix<C: AsRef<[CellCode]>>(matrix: &[C]) -> GridResult<Self> {
        let first = matrix.first().ok_or(GridError::NullOrEmptyInput)?.as_ref();
        if first.is_empty() {
            return Err(GridError::NullOrEmptyInput);
        }
        let expected = first.len();
        for (column, col) in matrix.iter().enumerate() {
            let got = col.as_ref().len();
            if got != expected {
                return Err(GridError::RaggedInput { column, expected, got });
            }
        }

        let width  = dimension(matrix.len())?;
        let height = dimension(expected)?;
        let mut grid = Self::new(width, height, CellCode::EMPTY)?;
        for (x, col) in matrix.iter().enumerate() {
            for (y, &v) in col.as_ref().iter().enumerate() {
                let i = grid.index(Position::new(x as i32, y as i32));
                grid.cells[i] = v;
            }
        }
        Ok(grid)
    }

    /// Builder-style toggle of the cyclic flag.
    pub fn with_cyclic(mut self, cyclic: bool) -> Self {
        self.cyclic = cyclic;
        self
    }

    /// Re-initialize in place to `width × height` filled with `fill`.
    ///
    /// The cyclic flag is kept.  On error the grid is left unchanged.
    pub fn reset(&mut self, width: i32, height: i32, fill: CellCode) -> GridResult<()> {
        let fresh = Self::new(width, height, fill)?;
        self.width  = fresh.width;
        self.height = fresh.height;
        self.cells  = fresh.cells;
        Ok(())
    }

    /// Re-initialize in place from a column-major matrix.
    ///
    /// The cyclic flag is kept.  On error the grid is left unchanged.
    pub fn reset_from_matrix<C: AsRef<[CellCode]>>(&mut self, matrix: &[C]) -> GridResult<()> {
        let fresh = Self::from_matrix(matrix)?;
        self.width  = fresh.width;
        self.height = fresh.height;
        self.cells  = fresh.cells;
        Ok(())
    }

    // ── Dimensions and topology ───────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dims(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// Switch wrap semantics for the algorithms.  Contents are untouched.
    #[inline]
    pub fn set_cyclic(&mut self, cyclic: bool) {
        self.cyclic = cyclic;
    }

    // ── Cell access (never wraps) ─────────────────────────────────────────

    /// Pure bounds predicate.
    #[inline]
    pub fn is_inside(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    pub fn get(&self, x: i32, y: i32) -> GridResult<CellCode> {
        self.get_at(Position::new(x, y))
    }

    pub fn set(&mut self, x: i32, y: i32, value: CellCode) -> GridResult<()> {
        self.set_at(Position::new(x, y), value)
    }

    pub fn get_at(&self, pos: Position) -> GridResult<CellCode> {
        self.check_inside(pos)?;
        Ok(self.cells[self.index(pos)])
    }

    pub fn set_at(&mut self, pos: Position, value: CellCode) -> GridResult<()> {
        self.check_inside(pos)?;
        let i = self.index(pos);
        self.cells[i] = value;
        Ok(())
    }

    /// Deep copy of the contents as `matrix[x][y]`.
    pub fn to_matrix(&self) -> Vec<Vec<CellCode>> {
        (0..self.width)
            .map(|x| (0..self.height).map(|y| self.cell(Position::new(x, y))).collect())
            .collect()
    }

    // ── Coordinate normalization ──────────────────────────────────────────

    /// Normalize `pos` for use by the algorithms: wrap on a cyclic grid,
    /// bounds-check on a bounded one.
    pub fn normalize(&self, pos: Position) -> GridResult<Position> {
        if self.cyclic {
            Ok(pos.wrapped(self.width, self.height))
        } else {
            self.check_inside(pos)?;
            Ok(pos)
        }
    }

    /// The cell one step from `pos` in `dir`, or `None` if that step leaves
    /// a bounded grid.  `pos` must already be normalized.
    #[inline]
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        step_within(pos, dir, self.width, self.height, self.cyclic)
    }

    /// Iterator over the 4-neighbors of a normalized `pos` in scan order
    /// `+x, -x, +y, -y`.  Wraps on cyclic grids, skips off-grid cells on
    /// bounded ones.
    ///
    /// The iterator copies the grid's geometry and does not borrow it, so it
    /// can be used while the grid is being mutated.
    #[inline]
    pub fn neighbors(&self, pos: Position) -> Neighbors {
        Neighbors {
            origin: pos,
            width:  self.width,
            height: self.height,
            cyclic: self.cyclic,
            next:   0,
        }
    }

    /// Number of 4-neighbors of `pos` that are not `blocked` — the branching
    /// factor used by the decision policy.
    pub fn open_neighbors<F: Fn(CellCode) -> bool>(&self, pos: Position, blocked: F) -> usize {
        self.neighbors(pos).filter(|&n| !blocked(self.cell(n))).count()
    }

    // ── Whole-grid queries ────────────────────────────────────────────────

    /// Iterator over every position, column by column.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| Position::new(x, y)))
    }

    /// Number of cells holding `code`.
    pub fn count(&self, code: CellCode) -> usize {
        self.cells.iter().filter(|&&c| c == code).count()
    }

    pub fn contains(&self, code: CellCode) -> bool {
        self.cells.contains(&code)
    }

    // ── Crate-internal unchecked access ───────────────────────────────────

    /// Flat index of an in-bounds position.
    #[inline]
    pub(crate) fn index(&self, pos: Position) -> usize {
        debug_assert!(self.is_inside(pos), "{pos} outside {}x{}", self.width, self.height);
        (pos.y * self.width + pos.x) as usize
    }

    /// Cell at an already-normalized position.
    #[inline]
    pub(crate) fn cell(&self, pos: Position) -> CellCode {
        self.cells[self.index(pos)]
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, pos: Position) -> &mut CellCode {
        let i = self.index(pos);
        &mut self.cells[i]
    }

    fn check_inside(&self, pos: Position) -> GridResult<()> {
        if self.is_inside(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds { pos, width: self.width, height: self.height })
        }
    }
}

// ── Neighbors ─────────────────────────────────────────────────────────────────

/// Iterator returned by [`Grid::neighbors`].
#[derive(Clone, Debug)]
pub struct Neighbors {
    origin: Position,
    width:  i32,
    height: i32,
    cyclic: bool,
    next:   usize,
}

impl Iterator for Neighbors {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while self.next < NEIGHBOR_SCAN.len() {
            let dir = NEIGHBOR_SCAN[self.next];
            self.next += 1;
            if let Some(p) = step_within(self.origin, dir, self.width, self.height, self.cyclic) {
                return Some(p);
            }
        }
        None
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[inline]
fn step_within(pos: Position, dir: Direction, width: i32, height: i32, cyclic: bool) -> Option<Position> {
    let next = pos.offset(dir);
    if cyclic {
        Some(next.wrapped(width, height))
    } else if next.x >= 0 && next.y >= 0 && next.x < width && next.y < height {
        Some(next)
    } else {
        None
    }
}

fn checked_len(width: i32, height: i32) -> GridResult<usize> {
    if width <= 0 || height <= 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(GridError::InvalidDimensions { width, height })
}

fn dimension(len: usize) -> GridResult<i32> {
    i32::try_from(len).map_err(|_| GridError::InvalidDimensions { width: i32::MAX, height: i32::MAX })
}
