use nebula_core::NebulaError;
use thiserror::Error;

/// Errors raised while building or evaluating neurons and layers.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum NnError {
    #[error("Input size mismatch: expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid initializer: {0}")]
    InvalidInit(String),

    #[error(transparent)]
    Graph(#[from] NebulaError),
}
