//! Common error types for the decision engine

use thiserror::Error;

/// Common result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types across the decision engine
#[derive(Error, Debug)]
pub enum Error {
    /// Probability vector length does not match the label registry
    #[error("probability vector has length {got}, expected {expected}")]
    Shape { expected: usize, got: usize },

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Threshold file parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
