//! Grid-service error type.

use thiserror::Error;

use gn_core::{GnError, Position};

/// Errors produced by `gn-grid`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("grid input is empty")]
    NullOrEmptyInput,

    #[error("ragged grid input: column {column} has length {got}, expected {expected}")]
    RaggedInput { column: usize, expected: usize, got: usize },

    #[error("position {pos} is outside the {width}x{height} grid")]
    OutOfBounds { pos: Position, width: i32, height: i32 },

    #[error("start position is missing")]
    NullStart,

    #[error("distance field is inconsistent at {at}: no neighbor at distance {expected}")]
    PathReconstructionInconsistency { at: Position, expected: i32 },

    #[error(transparent)]
    Core(#[from] GnError),
}

pub type GridResult<T> = Result<T, GridError>;
