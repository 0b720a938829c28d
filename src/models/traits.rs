//! Seams between the pipeline and the models it drives.
//!
//! The pipeline only talks to these traits, so tests and the `mock` feature can
//! swap in doubles without model files.

use crate::models::evaluator::EvaluatorError;
use crate::models::generator::GeneratorError;
use crate::models::ner::NerError;
use crate::qa::EntitySpan;

/// Measures text length in the question model's tokens.
pub trait TokenCounter {
    /// Returns the encoded length of `text` (special tokens included, no padding).
    fn count_tokens(&self, text: &str) -> Result<usize, GeneratorError>;
}

/// Prompt string → question string.
pub trait QuestionModel: TokenCounter + Send + Sync {
    /// Generates one question for a `<answer> ... <context> ...` prompt.
    fn generate_question(&self, prompt: &str) -> Result<String, GeneratorError>;

    /// Returns `true` when real weights are loaded.
    fn is_model_loaded(&self) -> bool;
}

/// (question, answer) → plausibility score.
pub trait PairScorer: Send + Sync {
    /// Scores one pair; higher means more plausible.
    fn score(&self, question: &str, answer: &str) -> Result<f32, EvaluatorError>;

    /// Returns `true` when real weights are loaded.
    fn is_model_loaded(&self) -> bool;
}

/// Sentences → typed entity spans.
pub trait EntityRecognizer: Send + Sync {
    /// Returns one span list per input sentence, in input order.
    fn recognize(&self, sentences: &[String]) -> Result<Vec<Vec<EntitySpan>>, NerError>;

    /// Returns `true` when real weights are loaded.
    fn is_model_loaded(&self) -> bool;
}
