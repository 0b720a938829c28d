use std::path::PathBuf;

use crate::constants::{DEFAULT_MAX_QUESTION_TOKENS, QG_SEQ_LEN};

#[derive(Debug, Clone)]
/// Configuration for [`T5QuestionModel`](super::T5QuestionModel).
pub struct GeneratorConfig {
    /// Directory containing `config.json`, `model.safetensors`, and `tokenizer.json`.
    pub model_path: Option<PathBuf>,

    /// Maximum encoder input length; longer prompts are truncated.
    pub seq_len: usize,

    /// Maximum number of decoded tokens per question.
    pub max_question_tokens: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            seq_len: QG_SEQ_LEN,
            max_question_tokens: DEFAULT_MAX_QUESTION_TOKENS,
        }
    }
}

impl GeneratorConfig {
    /// Env var locating the model directory.
    pub const ENV_MODEL_PATH: &'static str = "QUIZGEN_QG_MODEL_PATH";
    /// Env var overriding [`GeneratorConfig::max_question_tokens`].
    pub const ENV_MAX_QUESTION_TOKENS: &'static str = "QUIZGEN_MAX_QUESTION_TOKENS";

    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: Some(model_path.into()),
            ..Default::default()
        }
    }

    /// Creates a config that runs without a model (stub generation).
    pub fn stub() -> Self {
        Self::default()
    }

    /// Sets the decode budget.
    pub fn with_max_question_tokens(mut self, max_question_tokens: usize) -> Self {
        self.max_question_tokens = max_question_tokens;
        self
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.seq_len == 0 {
            return Err("seq_len must be greater than 0".to_string());
        }

        if self.max_question_tokens == 0 {
            return Err("max_question_tokens must be greater than 0".to_string());
        }

        if let Some(ref path) = self.model_path
            && path.as_os_str().is_empty()
        {
            return Err("model_path cannot be empty when provided".to_string());
        }

        Ok(())
    }

    /// Loads config from `QUIZGEN_QG_MODEL_PATH` and `QUIZGEN_MAX_QUESTION_TOKENS`.
    pub fn from_env() -> Self {
        let model_path = std::env::var(Self::ENV_MODEL_PATH)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let max_question_tokens = std::env::var(Self::ENV_MAX_QUESTION_TOKENS)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_QUESTION_TOKENS);

        Self {
            model_path,
            max_question_tokens,
            ..Default::default()
        }
    }
}
