//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `decisions.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{DecisionRow, OutputResult, SummaryRow};
use crate::writer::OutputWriter;

pub const DECISIONS_FILE: &str = "decisions.csv";
pub const SUMMARIES_FILE: &str = "tick_summaries.csv";

/// Writes a game trace to two CSV files.
pub struct CsvWriter {
    decisions: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut decisions = Writer::from_path(dir.join(DECISIONS_FILE))?;
        decisions.write_record(["tick", "x", "y", "direction", "mode", "reason"])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARIES_FILE))?;
        summaries.write_record(["tick", "score", "dots_left", "status"])?;

        Ok(Self {
            decisions,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_decision(&mut self, row: &DecisionRow) -> OutputResult<()> {
        self.decisions.write_record(&[
            row.tick.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.direction.as_str().to_string(),
            row.mode.as_str().to_string(),
            row.reason.as_str().to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.score.to_string(),
            row.dots_left.to_string(),
            row.status.as_str().to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.decisions.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
