//! Model wrappers and shared model utilities.
//!
//! - [`generator`] turns prompts into questions (T5).
//! - [`evaluator`] scores (question, answer) pairs (BERT classifier).
//! - [`ner`] finds typed entity spans for multiple-choice items.
//!
//! Each wrapper runs in a deterministic stub mode when no model path is set.

/// BERT sequence/token classifier heads.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// QA pair evaluator.
pub mod evaluator;
/// Question generation model.
pub mod generator;
/// Named-entity recognition.
pub mod ner;
/// Pipeline-facing model traits.
pub mod traits;
/// Tokenizer/model loading helpers.
pub mod utils;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use device::{DevicePreference, select_device};
pub use error::ModelError;
pub use evaluator::{EvaluatorConfig, EvaluatorError, QaEvaluator, score_pairs};
pub use generator::{GeneratorConfig, GeneratorError, T5QuestionModel};
pub use ner::{EntityExtractor, NerConfig, NerError};
pub use traits::{EntityRecognizer, PairScorer, QuestionModel, TokenCounter};

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockEntityRecognizer, MockPairScorer, MockQuestionModel};
