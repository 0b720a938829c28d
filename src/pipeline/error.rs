use thiserror::Error;

use crate::models::{EvaluatorError, GeneratorError, ModelError, NerError};
use crate::prompt::PromptError;

/// Errors returned by [`QuestionGenerator`](super::QuestionGenerator).
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Invalid prompt configuration (raised before any model call).
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The question model returned a different number of questions than prompts.
    #[error("{questions} questions were generated for {answers} answers")]
    CountMismatch { questions: usize, answers: usize },

    /// Question model failure.
    #[error(transparent)]
    Generation(#[from] GeneratorError),

    /// Evaluator failure.
    #[error(transparent)]
    Evaluation(#[from] EvaluatorError),

    /// Entity recogniser failure.
    #[error(transparent)]
    Entities(#[from] NerError),

    /// Device resolution failed while loading models.
    #[error(transparent)]
    Device(#[from] ModelError),
}

impl PipelineError {
    /// Returns `true` when the caller supplied invalid input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PipelineError::Prompt(_))
    }
}
