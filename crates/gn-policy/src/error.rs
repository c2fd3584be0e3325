use thiserror::Error;

use gn_core::Position;
use gn_grid::GridError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolicyError {
    /// Every neighbor of the agent is a wall, off-grid, or holds a dangerous
    /// threat.
    #[error("no legal move from {at}")]
    NoLegalMove { at: Position },

    #[error("policy configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
