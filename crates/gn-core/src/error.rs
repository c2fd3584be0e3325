//! Base error type.
//!
//! Sub-crates define their own error enums (`GridError`, `PolicyError`, …).
//! `GnError` only covers failures in the boundary conversions this crate
//! owns, such as parsing the `"x,y"` position text.

use thiserror::Error;

/// The error type for `gn-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GnError {
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `gn-core`.
pub type GnResult<T> = Result<T, GnError>;
