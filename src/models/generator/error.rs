use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by question model load/generation.
pub enum GeneratorError {
    /// Model files were not found.
    #[error("question model not found at path: {path}")]
    ModelNotFound {
        /// Missing model path.
        path: PathBuf,
    },

    /// Model load failed.
    #[error("failed to load question model: {reason}")]
    ModelLoadFailed {
        /// Error message.
        reason: String,
    },

    /// Generation failed.
    #[error("question generation failed: {reason}")]
    InferenceFailed {
        /// Error message.
        reason: String,
    },

    /// Tokenization or detokenization failed.
    #[error("tokenization failed: {reason}")]
    TokenizationFailed {
        /// Error message.
        reason: String,
    },

    /// Configuration is invalid.
    #[error("invalid question model configuration: {reason}")]
    InvalidConfig {
        /// Error message.
        reason: String,
    },
}

impl From<candle_core::Error> for GeneratorError {
    fn from(err: candle_core::Error) -> Self {
        GeneratorError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for GeneratorError {
    fn from(err: std::io::Error) -> Self {
        GeneratorError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
