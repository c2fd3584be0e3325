//! `gn-output` — game trace writers for gridnav.
//!
//! | Backend | Files created                            |
//! |---------|------------------------------------------|
//! | CSV     | `decisions.csv`, `tick_summaries.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by [`TraceObserver`],
//! which implements `gn_sim::GameObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gn_output::{CsvWriter, TraceObserver};
//!
//! let writer = CsvWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::new(writer);
//! game.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{DecisionRow, SummaryRow};
pub use writer::OutputWriter;
