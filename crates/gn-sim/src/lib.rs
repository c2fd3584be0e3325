//! `gn-sim` — headless game harness driving a gridnav policy.
//!
//! # Tick loop
//!
//! ```text
//! until status != Running:
//!   ① Decide   — NavigationPolicy::decide on the current grid, agent and
//!                ghost snapshots; the returned memory is kept for next tick.
//!   ② Move     — the agent steps unless the target is a wall or off-grid.
//!   ③ Eat      — dot: +1.  power item: +5 and every ghost turns vulnerable.
//!   ④ Decay    — vulnerability timers shrink by time_per_tick (floor 0).
//!   ⑤ Ghosts   — greedy chasers / random walkers; vulnerable ones wander.
//!   ⑥ Collide  — vulnerable ghost: +50 and respawn.  dangerous ghost: lost.
//!   ⑦ Status   — won when no consumable is left, timed out at max_ticks.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Builds the policy's per-tick fields with Rayon.        |
//! | `serde`    | Derives `Serialize`/`Deserialize` on config and status.|
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gn_policy::{DecisionPolicy, PolicyConfig};
//! use gn_sim::{GameBuilder, Level, NoopObserver};
//!
//! let policy = DecisionPolicy::new(PolicyConfig::default())?;
//! let mut game = GameBuilder::new(Level::classic()?, policy).build()?;
//! let outcome = game.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod game;
pub mod ghost;
pub mod level;
pub mod observer;


pub use builder::GameBuilder;
pub use error::{SimError, SimResult};
pub use game::{Game, GameConfig, GameOutcome, GameStatus, TickSummary};
pub use ghost::{Ghost, GhostKind};
pub use level::{Level, BUILTIN_LEVELS};
pub use observer::{GameObserver, NoopObserver};
