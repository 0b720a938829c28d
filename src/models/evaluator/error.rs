use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaluatorError {
    #[error("evaluator model not found at path: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load evaluator model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("evaluator inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("invalid evaluator configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The pair cannot be scored (e.g. a multiple-choice answer).
    #[error("invalid scoring input: {reason}")]
    InvalidInput { reason: String },
}

impl From<candle_core::Error> for EvaluatorError {
    fn from(err: candle_core::Error) -> Self {
        EvaluatorError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for EvaluatorError {
    fn from(err: std::io::Error) -> Self {
        EvaluatorError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
