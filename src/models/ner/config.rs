use std::path::PathBuf;

/// Maximum tokens per sentence fed to the recogniser.
pub const NER_MAX_SEQ_LEN: usize = 512;

#[derive(Debug, Clone, Default)]
/// Configuration for [`EntityExtractor`](super::EntityExtractor).
pub struct NerConfig {
    /// Directory of a BERT token-classification model; `None` uses the heuristic recogniser.
    pub model_path: Option<PathBuf>,
}

impl NerConfig {
    /// Env var locating the model directory.
    pub const ENV_MODEL_PATH: &'static str = "QUIZGEN_NER_MODEL_PATH";

    pub fn new<P: Into<PathBuf>>(model_path: P) -> Self {
        Self {
            model_path: Some(model_path.into()),
        }
    }

    pub fn stub() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref path) = self.model_path
            && path.as_os_str().is_empty()
        {
            return Err("model_path cannot be empty when provided".to_string());
        }
        Ok(())
    }

    pub fn from_env() -> Self {
        let model_path = std::env::var(Self::ENV_MODEL_PATH)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self { model_path }
    }
}
