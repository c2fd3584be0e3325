//! `gn-grid` — the grid service: storage, flood fill, distance fields, paths.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`grid`]     | `Grid` (bounds-checked cells, cyclic flag, neighbor scan)    |
//! | [`fill`]     | `Grid::fill` — work-list flood fill                          |
//! | [`distance`] | `DistanceField`, `Grid::all_distances`                       |
//! | [`path`]     | `GridPath`, `Grid::shortest_path`                            |
//! | [`field`]    | `DistanceFieldBuilder` — multi-source BFS                    |
//! | [`error`]    | `GridError`, `GridResult<T>`                                 |
//!
//! # Wrap semantics
//!
//! `get`/`set` never wrap: out-of-range coordinates are an error on every
//! grid.  The algorithms (`fill`, `all_distances`, `shortest_path`, the field
//! builder) normalize their inputs first — wrapping on a cyclic grid,
//! rejecting on a bounded one — and expand neighbors across edges only when
//! the grid is cyclic.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod distance;
pub mod error;
pub mod field;
pub mod fill;
pub mod grid;
pub mod path;

#[cfg(test)]
mod tests;

pub use distance::{DistanceField, UNREACHABLE};
pub use error::{GridError, GridResult};
pub use field::DistanceFieldBuilder;
pub use grid::{Grid, Neighbors};
pub use path::{GridPath, parse_start};
