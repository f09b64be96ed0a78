//! Errors raised by the evidence core.

use thiserror::Error;

/// Errors produced while building or rendering evidence models.
#[derive(Debug, Error)]
pub enum EvidenceError {
    /// The notation configuration could not be parsed.
    #[error("invalid notation config: {0}")]
    Config(#[from] toml::de::Error),

    /// The evidence model could not be rendered as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used by the evidence core.
pub type EvidenceResult<T> = Result<T, EvidenceError>;
