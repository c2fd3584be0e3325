use thiserror::Error;

use gn_core::Position;
use gn_grid::GridError;
use gn_policy::PolicyError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("game configuration error: {0}")]
    Config(String),

    #[error("level has no rows")]
    EmptyLevel,

    #[error("level row {row} has width {got}, expected {expected}")]
    RaggedLevel { row: usize, expected: usize, got: usize },

    #[error("level has no agent spawn 'P'")]
    MissingAgentSpawn,

    #[error("level has a second agent spawn at {second} (first at {first})")]
    DuplicateAgentSpawn { first: Position, second: Position },

    #[error("unknown built-in level {0:?}")]
    UnknownLevel(String),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("policy error: {0}")]
    Policy(#[from] PolicyError),
}

pub type SimResult<T> = Result<T, SimError>;
