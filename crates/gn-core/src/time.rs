//! Game time model.
//!
//! # Design
//!
//! Time advances in discrete `Tick`s.  Timers that the game exposes in
//! continuous "time units" (a threat's remaining vulnerability, for example)
//! are converted through `GameClock`:
//!
//!   game_time = tick * time_per_tick
//!
//! The default resolution is 0.1 time units per tick, so a 6.0-unit power
//! pellet lasts 60 ticks.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute game tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── GameClock ─────────────────────────────────────────────────────────────────

/// Converts between tick counts and continuous game time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameClock {
    /// Game time units represented by one tick.  Default: 0.1.
    pub time_per_tick: f64,
    /// The current tick — advanced by `GameClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl GameClock {
    pub fn new(time_per_tick: f64) -> Self {
        Self { time_per_tick, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed game time since tick 0.
    #[inline]
    pub fn elapsed_time(&self) -> f64 {
        self.current_tick.0 as f64 * self.time_per_tick
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (t={:.2})", self.current_tick, self.elapsed_time())
    }
}

/// Whole ticks that fit into `time` at `time_per_tick` resolution.
///
/// A tiny epsilon absorbs float error so that e.g. `1.0 / 0.1` counts as 10
/// ticks, not 9.
pub fn whole_ticks(time: f64, time_per_tick: f64) -> u64 {
    if time <= 0.0 || time_per_tick <= 0.0 {
        return 0;
    }
    (time / time_per_tick + 1e-9).floor() as u64
}
