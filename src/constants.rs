//! Cross-cutting, shared constants.
//!
//! Prompt sentinels and sequence limits shared by the prompt builder, the
//! models and the segmenter.

/// Sentinel preceding the designated answer span in a generation prompt.
pub const ANSWER_TOKEN: &str = "<answer>";

/// Sentinel preceding the context passage in a generation prompt.
pub const CONTEXT_TOKEN: &str = "<context>";

/// Fixed input length of the question generation model.
pub const QG_SEQ_LEN: usize = 512;

/// Fixed input length of the QA evaluator.
pub const EVALUATOR_SEQ_LEN: usize = 512;

/// Token budget of one context segment (leaves room for the answer span).
pub const DEFAULT_SEGMENT_TOKENS: usize = 490;

/// Sentences longer than this (in characters) are also cut on inner punctuation.
pub const MAX_SENTENCE_CHARS: usize = 128;

/// Cut pieces need strictly more words than this to be kept.
pub const MIN_CUT_WORDS: usize = 5;

/// Upper bound on choices in a multiple-choice answer (correct one included).
pub const MAX_CHOICES: usize = 4;

/// Questions returned by a ranked run when the caller does not ask for a count.
pub const DEFAULT_NUM_QUESTIONS: usize = 10;

/// Upper bound on decoded question length.
pub const DEFAULT_MAX_QUESTION_TOKENS: usize = 64;

/// Answer styles accepted by [`crate::prompt::AnswerStyle`].
pub const VALID_ANSWER_STYLES: [&str; 3] = ["all", "sentences", "multiple_choice"];
