//! Error types shared by every fallible operation in the crate.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LinregError>;

/// Error type for data generation, prediction, loss evaluation and fitting.
#[derive(Debug, Error)]
pub enum LinregError {
    /// Two operands have incompatible shapes.
    ///
    /// `context` names the operation that detected the mismatch
    /// (e.g. `"predict"`, `"mse loss"`).
    #[error("dimension mismatch in {context}: expected {expected}, got {got}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    /// The gradient-descent driver hit its iteration cap without the
    /// parameter update dropping below the tolerance.
    #[error("did not converge after {iterations} iterations (last delta {last_delta:e})")]
    NotConverged { iterations: usize, last_delta: f64 },

    /// Empty data provided where non-empty was required.
    #[error("empty data: {0}")]
    EmptyData(String),

    /// Invalid hyperparameter or configuration value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Binary (de)serialization of model parameters failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// A configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl LinregError {
    /// Shorthand for building a [`LinregError::DimensionMismatch`].
    pub(crate) fn mismatch(context: &'static str, expected: usize, got: usize) -> Self {
        LinregError::DimensionMismatch {
            context,
            expected,
            got,
        }
    }

    /// Returns `true` if this error is a shape mismatch.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, LinregError::DimensionMismatch { .. })
    }
}
