//! In-memory model doubles for tests (enabled by the `mock` feature).

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::evaluator::EvaluatorError;
use super::generator::{GeneratorError, prompt_answer_span};
use super::ner::NerError;
use super::traits::{EntityRecognizer, PairScorer, QuestionModel, TokenCounter};
use crate::qa::EntitySpan;

/// Question model that echoes the answer span and counts calls.
#[derive(Debug, Default)]
pub struct MockQuestionModel {
    calls: AtomicUsize,
    fail_on: Option<String>,
}

impl MockQuestionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails generation for any prompt containing `needle`.
    pub fn failing_on(needle: impl Into<String>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_on: Some(needle.into()),
        }
    }

    /// Number of `generate_question` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TokenCounter for MockQuestionModel {
    fn count_tokens(&self, text: &str) -> Result<usize, GeneratorError> {
        Ok(text.split_whitespace().count() + 1)
    }
}

impl QuestionModel for MockQuestionModel {
    fn generate_question(&self, prompt: &str) -> Result<String, GeneratorError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(needle) = &self.fail_on
            && prompt.contains(needle.as_str())
        {
            return Err(GeneratorError::InferenceFailed {
                reason: format!("mock failure on '{needle}'"),
            });
        }

        let span = prompt_answer_span(prompt).unwrap_or(prompt);
        Ok(format!("Q{}: {}?", n, span))
    }

    fn is_model_loaded(&self) -> bool {
        false
    }
}

/// Scorer returning fixed scores keyed by answer text.
#[derive(Debug, Default)]
pub struct MockPairScorer {
    scores: HashMap<String, f32>,
    default_score: f32,
    calls: AtomicUsize,
}

impl MockPairScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores `answer` as `score` regardless of the question.
    pub fn with_score(mut self, answer: impl Into<String>, score: f32) -> Self {
        self.scores.insert(answer.into(), score);
        self
    }

    /// Score for answers without an explicit entry.
    pub fn with_default_score(mut self, score: f32) -> Self {
        self.default_score = score;
        self
    }

    /// Number of `score` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PairScorer for MockPairScorer {
    fn score(&self, _question: &str, answer: &str) -> Result<f32, EvaluatorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .scores
            .get(answer)
            .copied()
            .unwrap_or(self.default_score))
    }

    fn is_model_loaded(&self) -> bool {
        false
    }
}

/// Recogniser that reports every known span occurring in a sentence.
#[derive(Debug, Default)]
pub struct MockEntityRecognizer {
    known: Vec<EntitySpan>,
    calls: AtomicUsize,
}

impl MockEntityRecognizer {
    pub fn new(known: Vec<EntitySpan>) -> Self {
        Self {
            known,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `recognize` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EntityRecognizer for MockEntityRecognizer {
    fn recognize(&self, sentences: &[String]) -> Result<Vec<Vec<EntitySpan>>, NerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(sentences
            .iter()
            .map(|sentence| {
                self.known
                    .iter()
                    .filter(|span| sentence.contains(span.text.as_str()))
                    .cloned()
                    .collect()
            })
            .collect())
    }

    fn is_model_loaded(&self) -> bool {
        false
    }
}
