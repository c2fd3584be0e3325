//! Cell codes stored in the grid buffer.
//!
//! The engine only needs to tell walls from everything else and to match a
//! caller-chosen target code, so `CellCode` is an open integer space with a
//! handful of well-known values.  The numeric values follow the level format
//! used by the harness (`WALL = -999`, `EMPTY = 0`, `DOT = 10`,
//! `POWER = 11`).

use std::fmt;

/// An integer cell value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCode(pub i32);

impl CellCode {
    /// Impassable cell.
    pub const WALL: CellCode = CellCode(-999);
    /// Passable, nothing to collect.
    pub const EMPTY: CellCode = CellCode(0);
    /// Low-value consumable.
    pub const DOT: CellCode = CellCode(10);
    /// High-value consumable; eating it turns threats vulnerable.
    pub const POWER: CellCode = CellCode(11);

    #[inline]
    pub fn is_wall(self) -> bool {
        self == CellCode::WALL
    }

    /// `true` for the two consumable codes.
    #[inline]
    pub fn is_consumable(self) -> bool {
        self == CellCode::DOT || self == CellCode::POWER
    }
}

impl From<i32> for CellCode {
    #[inline]
    fn from(v: i32) -> Self {
        CellCode(v)
    }
}

impl From<CellCode> for i32 {
    #[inline]
    fn from(c: CellCode) -> i32 {
        c.0
    }
}

impl fmt::Display for CellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CellCode::WALL  => f.write_str("wall"),
            CellCode::EMPTY => f.write_str("empty"),
            CellCode::DOT   => f.write_str("dot"),
            CellCode::POWER => f.write_str("power"),
            CellCode(v)     => write!(f, "code({v})"),
        }
    }
}
