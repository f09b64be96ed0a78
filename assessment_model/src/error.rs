//! Errors raised by model containers.

use thiserror::Error;

/// Errors produced by the assessment model.
///
/// Every failing operation leaves the container it was called on unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// An index was outside the valid range of a container.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A constructor received an argument it cannot accept.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The JSON form of a model could not be produced or parsed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Serialization(err.to_string())
    }
}

/// Result alias used throughout the model.
pub type ModelResult<T> = Result<T, ModelError>;
