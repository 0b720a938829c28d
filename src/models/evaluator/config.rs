use std::path::PathBuf;

use crate::constants::EVALUATOR_SEQ_LEN;

/// Class index of the "good pair" logit for two-label heads.
pub const GOOD_PAIR_LABEL: usize = 1;

#[derive(Debug, Clone)]
/// Configuration for [`QaEvaluator`](super::QaEvaluator).
pub struct EvaluatorConfig {
    /// Directory containing `config.json`, `model.safetensors`, and `tokenizer.json`.
    pub model_path: Option<PathBuf>,

    /// Fixed pair-encoding length (truncate + pad).
    pub seq_len: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            seq_len: EVALUATOR_SEQ_LEN,
        }
    }
}

impl EvaluatorConfig {
    /// Env var locating the model directory.
    pub const ENV_MODEL_PATH: &'static str = "QUIZGEN_EVALUATOR_MODEL_PATH";

    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: Some(model_path.into()),
            ..Default::default()
        }
    }

    /// Creates a config that runs without a model (stub scoring).
    pub fn stub() -> Self {
        Self::default()
    }

    /// Validates basic invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.seq_len == 0 {
            return Err("seq_len must be greater than 0".to_string());
        }

        if let Some(ref path) = self.model_path
            && path.as_os_str().is_empty()
        {
            return Err("model_path cannot be empty when provided".to_string());
        }

        Ok(())
    }

    /// Loads config from `QUIZGEN_EVALUATOR_MODEL_PATH`.
    pub fn from_env() -> Self {
        let model_path = std::env::var(Self::ENV_MODEL_PATH)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            model_path,
            ..Default::default()
        }
    }
}
