//! Game observer trait for progress reporting and trace collection.

use gn_core::{Position, Tick};
use gn_policy::Decision;

use crate::{GameOutcome, TickSummary};

/// Callbacks invoked by [`Game::run`][crate::Game::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — score printer
///
/// ```rust,ignore
/// struct ScorePrinter;
///
/// impl GameObserver for ScorePrinter {
///     fn on_tick_end(&mut self, summary: &TickSummary) {
///         println!("{}: score {}", summary.tick, summary.score);
///     }
/// }
/// ```
pub trait GameObserver {
    /// Called at the very start of each tick, before the policy runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called with the policy's decision before the agent moves.
    ///
    /// `agent` is the position the decision was made from.
    fn on_decision(&mut self, _tick: Tick, _agent: Position, _decision: &Decision) {}

    /// Called at the end of each tick, after ghosts moved and collisions were
    /// resolved.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called once when the game stops.
    fn on_game_end(&mut self, _outcome: &GameOutcome) {}
}

/// A [`GameObserver`] that does nothing.
pub struct NoopObserver;

impl GameObserver for NoopObserver {}
