//! Grid positions, movement directions, and the `"x,y"` text convention.
//!
//! # Axis convention
//!
//! `x` grows to the right and `y` grows **upwards**: [`Direction::Up`] is
//! `y + 1`.  Levels written top-to-bottom in text are flipped on load so the
//! bottom row is `y = 0`.
//!
//! # Text form
//!
//! Positions cross process and collaborator boundaries as `"x,y"` strings.
//! [`Position`]'s `Display` writes exactly `x,y` (no spaces) and its
//! `FromStr` accepts `x,y`, trimming whitespace around the whole string and
//! around each component.  Nothing else is accepted.

use std::fmt;
use std::str::FromStr;

use crate::GnError;

// ── Position ──────────────────────────────────────────────────────────────────

/// An integer cell coordinate.
///
/// A `Position` carries no grid reference; callers normalize it against the
/// owning grid (wrap when cyclic, bounds-check when bounded) before use.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The un-normalized neighbor one step in `dir`.
    #[inline]
    pub fn offset(self, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// Wrap both coordinates into `[0, width) × [0, height)`.
    ///
    /// # Panics
    /// Panics if `width` or `height` is zero or negative.
    #[inline]
    pub fn wrapped(self, width: i32, height: i32) -> Position {
        Position::new(self.x.rem_euclid(width), self.y.rem_euclid(height))
    }

    /// Plain Manhattan distance.
    #[inline]
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Manhattan distance on a torus of the given dimensions: each axis takes
    /// the shorter of the direct and the wrapped-around gap.
    pub fn toroidal_manhattan(self, other: Position, width: i32, height: i32) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.min(width as u32 - dx) + dy.min(height as u32 - dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = GnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (x, y) = trimmed.split_once(',').ok_or_else(|| {
            GnError::Parse(format!("invalid position {trimmed:?}: expected \"x,y\""))
        })?;
        let coord = |part: &str| {
            part.trim().parse::<i32>().map_err(|_| {
                GnError::Parse(format!("invalid coordinate {part:?} in position {trimmed:?}"))
            })
        };
        Ok(Position::new(coord(x)?, coord(y)?))
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// A per-tick movement choice.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// No move this tick.
    #[default]
    Stay,
    /// `y + 1`.
    Up,
    /// `x - 1`.
    Left,
    /// `y - 1`.
    Down,
    /// `x + 1`.
    Right,
}

impl Direction {
    /// The four real moves in the fixed scan order used wherever a
    /// deterministic first-match tie-break is needed.
    pub const MOVES: [Direction; 4] =
        [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    /// `(dx, dy)` for one step.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Stay  => (0, 0),
            Direction::Up    => (0, 1),
            Direction::Left  => (-1, 0),
            Direction::Down  => (0, -1),
            Direction::Right => (1, 0),
        }
    }

    /// The reverse move.  `Stay` is its own opposite.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Stay  => Direction::Stay,
            Direction::Up    => Direction::Down,
            Direction::Left  => Direction::Right,
            Direction::Down  => Direction::Up,
            Direction::Right => Direction::Left,
        }
    }

    #[inline]
    pub const fn is_move(self) -> bool {
        !matches!(self, Direction::Stay)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Stay  => "stay",
            Direction::Up    => "up",
            Direction::Left  => "left",
            Direction::Down  => "down",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
