use thiserror::Error;

use crate::constants::VALID_ANSWER_STYLES;

/// Errors raised while building question-generation prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The requested answer style is not one of [`VALID_ANSWER_STYLES`].
    #[error("invalid answer style '{value}': please choose from {valid:?}")]
    InvalidAnswerStyle {
        value: String,
        valid: [&'static str; 3],
    },
}

impl PromptError {
    pub(crate) fn invalid_style(value: &str) -> Self {
        PromptError::InvalidAnswerStyle {
            value: value.to_string(),
            valid: VALID_ANSWER_STYLES,
        }
    }
}
