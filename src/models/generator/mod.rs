//! Question generation model (T5 encoder-decoder, greedy decoding).
//!
//! Use [`GeneratorConfig::stub`] for tests/examples without model files.

pub mod config;
pub mod error;


pub use config::GeneratorConfig;
pub use error::GeneratorError;

use candle_core::{DType, Device, Tensor, D};
use candle_nn::VarBuilder;
use candle_transformers::models::t5::{self, T5ForConditionalGeneration};
use parking_lot::Mutex;
use tokenizers::Tokenizer;
use tracing::{debug, info, warn};

use crate::constants::{ANSWER_TOKEN, CONTEXT_TOKEN};
use crate::models::traits::{QuestionModel, TokenCounter};
use crate::models::utils::{load_tokenizer, missing_model_file, truncating, unbounded};

struct T5Backend {
    model: Mutex<T5ForConditionalGeneration>,
    /// Truncates to `seq_len` without padding; used for prompts.
    prompt_tokenizer: Tokenizer,
    /// No truncation or padding; used for length measurement and decoding.
    raw_tokenizer: Tokenizer,
    decoder_start_token_id: u32,
    eos_token_id: u32,
    use_cache: bool,
}

/// Generates one question per prompt (supports stub mode).
pub struct T5QuestionModel {
    device: Device,
    config: GeneratorConfig,
    backend: Option<T5Backend>,
}

impl std::fmt::Debug for T5QuestionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("T5QuestionModel")
            .field("device", &format!("{:?}", self.device))
            .field("config", &self.config)
            .field("model_loaded", &self.backend.is_some())
            .finish()
    }
}

impl T5QuestionModel {
    /// Loads the model on an already resolved device.
    pub fn load(config: GeneratorConfig, device: Device) -> Result<Self, GeneratorError> {
        if let Err(msg) = config.validate() {
            return Err(GeneratorError::InvalidConfig { reason: msg });
        }

        let Some(model_path) = config.model_path.clone() else {
            warn!("No question model path configured, operating in stub mode");
            return Ok(Self {
                device,
                config,
                backend: None,
            });
        };

        if !model_path.exists() {
            return Err(GeneratorError::ModelNotFound { path: model_path });
        }
        if let Some(missing) = missing_model_file(&model_path) {
            return Err(GeneratorError::ModelLoadFailed {
                reason: format!("Missing {} in {}", missing, model_path.display()),
            });
        }

        info!(
            model_path = %model_path.display(),
            seq_len = config.seq_len,
            max_question_tokens = config.max_question_tokens,
            "Loading question generation model"
        );

        let config_content = std::fs::read_to_string(model_path.join("config.json"))?;
        let t5_config: t5::Config = serde_json::from_str(&config_content).map_err(|e| {
            GeneratorError::ModelLoadFailed {
                reason: format!("Failed to parse config: {}", e),
            }
        })?;

        // SAFETY: the weights file is not modified while the model is alive.
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(
                &[model_path.join("model.safetensors")],
                DType::F32,
                &device,
            )?
        };
        let model = T5ForConditionalGeneration::load(vb, &t5_config).map_err(|e| {
            GeneratorError::ModelLoadFailed {
                reason: format!("Failed to load T5 model: {}", e),
            }
        })?;

        let tokenizer = load_tokenizer(&model_path).map_err(|e| GeneratorError::ModelLoadFailed {
            reason: format!("Failed to load tokenizer: {}", e),
        })?;
        let prompt_tokenizer = truncating(&tokenizer, config.seq_len)?;
        let raw_tokenizer = unbounded(&tokenizer)?;

        let decoder_start_token_id = t5_config
            .decoder_start_token_id
            .unwrap_or(t5_config.pad_token_id) as u32;

        info!("Question generation model loaded successfully");

        Ok(Self {
            device,
            config,
            backend: Some(T5Backend {
                model: Mutex::new(model),
                prompt_tokenizer,
                raw_tokenizer,
                decoder_start_token_id,
                eos_token_id: t5_config.eos_token_id as u32,
                use_cache: t5_config.use_cache,
            }),
        })
    }

    /// Creates a stub model on the CPU.
    pub fn stub() -> Result<Self, GeneratorError> {
        Self::load(GeneratorConfig::stub(), Device::Cpu)
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    fn generate_with_model(&self, backend: &T5Backend, prompt: &str) -> Result<String, GeneratorError> {
        let encoding = backend
            .prompt_tokenizer
            .encode(prompt, true)
            .map_err(|e| GeneratorError::TokenizationFailed {
                reason: e.to_string(),
            })?;
        let input_ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;

        let mut model = backend.model.lock();
        model.clear_kv_cache();
        let encoder_output = model.encode(&input_ids)?;

        let mut output_ids: Vec<u32> = vec![backend.decoder_start_token_id];
        for step in 0..self.config.max_question_tokens {
            let decoder_input = if step == 0 || !backend.use_cache {
                Tensor::new(output_ids.as_slice(), &self.device)?.unsqueeze(0)?
            } else {
                let last = output_ids[output_ids.len() - 1];
                Tensor::new(&[last], &self.device)?.unsqueeze(0)?
            };

            let logits = model.decode(&decoder_input, &encoder_output)?.squeeze(0)?;
            let next = logits.argmax(D::Minus1)?.to_scalar::<u32>()?;
            if next == backend.eos_token_id {
                break;
            }
            output_ids.push(next);
        }
        model.clear_kv_cache();
        drop(model);

        backend
            .raw_tokenizer
            .decode(&output_ids[1..], true)
            .map(|q| q.trim().to_string())
            .map_err(|e| GeneratorError::TokenizationFailed {
                reason: e.to_string(),
            })
    }

    fn generate_stub(&self, prompt: &str) -> String {
        let span = prompt_answer_span(prompt).unwrap_or(prompt);
        let span = span.trim().trim_end_matches(['.', '!', '?']).trim();
        format!("What does the passage say about {}?", span)
    }
}

impl TokenCounter for T5QuestionModel {
    fn count_tokens(&self, text: &str) -> Result<usize, GeneratorError> {
        match &self.backend {
            Some(backend) => backend
                .raw_tokenizer
                .encode(text, true)
                .map(|enc| enc.len())
                .map_err(|e| GeneratorError::TokenizationFailed {
                    reason: e.to_string(),
                }),
            // Words plus the end-of-sequence marker.
            None => Ok(text.split_whitespace().count() + 1),
        }
    }
}

impl QuestionModel for T5QuestionModel {
    fn generate_question(&self, prompt: &str) -> Result<String, GeneratorError> {
        debug!(
            prompt_len = prompt.len(),
            model_loaded = self.backend.is_some(),
            "Generating question"
        );

        match &self.backend {
            Some(backend) => self.generate_with_model(backend, prompt),
            None => Ok(self.generate_stub(prompt)),
        }
    }

    fn is_model_loaded(&self) -> bool {
        self.backend.is_some()
    }
}

/// Returns the text between the answer and context sentinels of a prompt.
pub fn prompt_answer_span(prompt: &str) -> Option<&str> {
    let start = prompt.find(ANSWER_TOKEN)? + ANSWER_TOKEN.len();
    let rest = &prompt[start..];
    let end = rest.find(CONTEXT_TOKEN).unwrap_or(rest.len());
    Some(rest[..end].trim())
}
