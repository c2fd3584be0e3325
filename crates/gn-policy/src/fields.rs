//! The three distance fields a decision reads.

use gn_core::{CellCode, Position, Threat};
use gn_grid::{DistanceField, DistanceFieldBuilder, Grid, GridResult};

/// Per-tick distance fields, all blocked by walls.
#[derive(Clone, Debug)]
pub struct TickFields {
    /// Distance to the nearest dot.
    pub dot:    DistanceField,
    /// Distance to the nearest power item.
    pub power:  DistanceField,
    /// Distance to the nearest dangerous threat.
    pub danger: DistanceField,
}

impl TickFields {
    /// Build all three fields from scratch.
    ///
    /// With the `parallel` feature the fields are built concurrently; the
    /// result is identical either way.
    pub fn build(grid: &Grid, threats: &[Threat]) -> GridResult<Self> {
        let builder = DistanceFieldBuilder::new(grid);
        let sources: Vec<Position> =
            threats.iter().filter(|t| t.is_dangerous()).map(|t| t.pos).collect();

        #[cfg(feature = "parallel")]
        let ((dot, power), danger) = rayon::join(
            || {
                rayon::join(
                    || builder.nearest_code(CellCode::DOT),
                    || builder.nearest_code(CellCode::POWER),
                )
            },
            || builder.nearest_positions(sources),
        );

        #[cfg(not(feature = "parallel"))]
        let ((dot, power), danger) = (
            (builder.nearest_code(CellCode::DOT), builder.nearest_code(CellCode::POWER)),
            builder.nearest_positions(sources),
        );

        Ok(Self { dot, power, danger: danger? })
    }

    /// Distance to the nearest consumable of either kind.
    pub fn consumable(&self, pos: Position) -> Option<u32> {
        match (self.dot.get(pos), self.power.get(pos)) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b)             => a.or(b),
        }
    }
}
