//! `gn-policy` — the per-tick decision policy.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`config`]   | `PolicyConfig`, `ScoreWeights`, presets and validation         |
//! | [`memory`]   | `LoopMemory`, `AgentMemory` — state threaded between ticks     |
//! | [`context`]  | `TickContext<'a>` — read-only snapshot of one tick             |
//! | [`fields`]   | `TickFields` — dot, power and danger distance fields           |
//! | [`decision`] | `Decision`, `Mode`, `Reason`                                   |
//! | [`model`]    | `NavigationPolicy` trait                                       |
//! | [`policy`]   | `DecisionPolicy` — escape / chase / forage state machine       |
//! | [`noop`]     | `StayPolicy` — never moves                                     |
//! | [`error`]    | `PolicyError`, `PolicyResult<T>`                               |
//!
//! # Design notes
//!
//! A policy value holds configuration only.  Last direction, last position
//! and loop memory live in [`AgentMemory`], which the caller passes into
//! every decision and receives back inside the [`Decision`].  This keeps
//! `NavigationPolicy` `Send + Sync` and makes every decision a pure function
//! of its inputs.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Builds the three per-tick fields with `rayon::join`.        |
//! | `serde`    | Derives `Serialize`/`Deserialize` on config and outputs.    |

pub mod config;
pub mod context;
pub mod decision;
pub mod error;
pub mod fields;
pub mod memory;
pub mod model;
pub mod noop;
pub mod policy;


pub use config::{PolicyConfig, ScoreWeights};
pub use context::TickContext;
pub use decision::{Decision, Mode, Reason};
pub use error::{PolicyError, PolicyResult};
pub use fields::TickFields;
pub use memory::{AgentMemory, LoopMemory};
pub use model::NavigationPolicy;
pub use noop::StayPolicy;
pub use policy::DecisionPolicy;
