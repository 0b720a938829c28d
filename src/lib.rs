//! Quizgen library crate (used by the server, the CLI and integration tests).
//!
//! Turns free text into ranked question–answer pairs:
//!
//! 1. [`text`] packs paragraphs into token-bounded segments and extracts
//!    candidate sentences.
//! 2. [`prompt`] builds `<answer> … <context> …` prompts from sentences and
//!    from recognised entities (with multiple-choice distractors).
//! 3. [`models`] wraps the T5 question model, the BERT pair evaluator and
//!    the BERT entity recogniser. Each runs in a deterministic stub mode
//!    when no weights are configured.
//! 4. [`ranking`] keeps the best-scored pairs.
//!
//! [`QuestionGenerator`] runs the whole pipeline; [`gateway`] exposes it
//! over HTTP.
//!
//! ## Test/Mock Support
//! Mock models are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod gateway;
pub mod models;
pub mod pipeline;
pub mod prompt;
pub mod qa;
pub mod ranking;
pub mod text;

pub use config::{Config, ConfigError};
pub use constants::{
    ANSWER_TOKEN, CONTEXT_TOKEN, DEFAULT_NUM_QUESTIONS, DEFAULT_SEGMENT_TOKENS, MAX_CHOICES,
    VALID_ANSWER_STYLES,
};
pub use models::{
    DevicePreference, EntityExtractor, EntityRecognizer, EvaluatorConfig, EvaluatorError,
    GeneratorConfig, GeneratorError, ModelError, NerConfig, NerError, PairScorer, QaEvaluator,
    QuestionModel, T5QuestionModel, TokenCounter, select_device,
};
#[cfg(any(test, feature = "mock"))]
pub use models::{MockEntityRecognizer, MockPairScorer, MockQuestionModel};
pub use pipeline::{GenerateOptions, PipelineError, QuestionGenerator};
pub use prompt::{AnswerStyle, PromptError, build_choices};
pub use qa::{Answer, Choice, EntitySpan, QaPair, QgInput, ScoredCandidate, render_qa};
pub use ranking::{Ranked, all_qa_pairs, rank_qa_pairs};
pub use text::{Segment, split_into_segments, split_sentences};
