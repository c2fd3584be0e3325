//! `gn-core` — foundational types for the `gridnav` navigation engine.
//!
//! This crate is a dependency of every other `gn-*` crate.  It has no `gn-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`pos`]     | `Position`, `Direction`, the `"x,y"` text convention      |
//! | [`cell`]    | `CellCode` and the well-known codes                       |
//! | [`ids`]     | `ThreatId`                                                |
//! | [`threat`]  | `Threat` snapshot (position + vulnerability timer)        |
//! | [`time`]    | `Tick`, `GameClock`                                       |
//! | [`rng`]     | `ThreatRng` (per-threat seeded streams)                   |
//! | [`error`]   | `GnError`, `GnResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod cell;
pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod threat;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::CellCode;
pub use error::{GnError, GnResult};
pub use ids::ThreatId;
pub use pos::{Direction, Position};
pub use rng::ThreatRng;
pub use threat::Threat;
pub use time::{GameClock, Tick};
