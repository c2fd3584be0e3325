//! The `OutputWriter` trait implemented by trace backends.

use crate::{DecisionRow, OutputResult, SummaryRow};

/// A sink for per-tick decisions and summaries.
///
/// Errors are returned to the caller; [`TraceObserver`](crate::TraceObserver)
/// stores the first one for [`take_error`](crate::TraceObserver::take_error).
pub trait OutputWriter {
    /// Write one decision row.
    fn write_decision(&mut self, row: &DecisionRow) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
