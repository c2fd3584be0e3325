//! `TraceObserver<W>` — bridges `GameObserver` to an `OutputWriter`.

use gn_core::{Position, Tick};
use gn_policy::Decision;
use gn_sim::{GameObserver, GameOutcome, TickSummary};

use crate::row::{DecisionRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`GameObserver`] that writes every decision and tick summary to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `GameObserver`
/// methods have no return value.  After `game.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct TraceObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `game.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> GameObserver for TraceObserver<W> {
    fn on_decision(&mut self, tick: Tick, agent: Position, decision: &Decision) {
        let row = DecisionRow {
            tick:      tick.0,
            x:         agent.x,
            y:         agent.y,
            direction: decision.direction,
            mode:      decision.mode,
            reason:    decision.reason,
        };
        let result = self.writer.write_decision(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        let row = SummaryRow {
            tick:      summary.tick.0,
            score:     summary.score,
            dots_left: summary.dots_left,
            status:    summary.status,
        };
        let result = self.writer.write_summary(&row);
        self.store_err(result);
    }

    fn on_game_end(&mut self, _outcome: &GameOutcome) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
