use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by entity recognition.
pub enum NerError {
    /// Model files were not found.
    #[error("entity model not found at path: {path}")]
    ModelNotFound {
        /// Missing model path.
        path: PathBuf,
    },

    /// Model load failed.
    #[error("failed to load entity model: {reason}")]
    ModelLoadFailed {
        /// Error message.
        reason: String,
    },

    /// Inference failed.
    #[error("entity recognition failed: {reason}")]
    InferenceFailed {
        /// Error message.
        reason: String,
    },

    /// Tokenization failed.
    #[error("tokenization failed: {reason}")]
    TokenizationFailed {
        /// Error message.
        reason: String,
    },

    /// Configuration is invalid.
    #[error("invalid entity model configuration: {reason}")]
    InvalidConfig {
        /// Error message.
        reason: String,
    },
}

impl From<candle_core::Error> for NerError {
    fn from(err: candle_core::Error) -> Self {
        NerError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for NerError {
    fn from(err: std::io::Error) -> Self {
        NerError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
