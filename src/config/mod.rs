//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `QUIZGEN_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::{DEFAULT_MAX_QUESTION_TOKENS, DEFAULT_SEGMENT_TOKENS};
use crate::models::{DevicePreference, EvaluatorConfig, GeneratorConfig, NerConfig};

/// Server and pipeline configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `QUIZGEN_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Compute device for every model. Default: `auto`.
    pub device: DevicePreference,

    /// Question-generation model directory (T5 + tokenizer).
    pub qg_model_path: Option<PathBuf>,

    /// QA evaluator model directory (BERT classifier + tokenizer).
    pub evaluator_model_path: Option<PathBuf>,

    /// Entity recogniser model directory (BERT token classifier + tokenizer).
    pub ner_model_path: Option<PathBuf>,

    /// Decode budget per question. Default: `64`.
    pub max_question_tokens: usize,

    /// Token budget per context segment. Default: `490`.
    pub segment_tokens: usize,

    /// Seed for distractor sampling; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            device: DevicePreference::Auto,
            qg_model_path: None,
            evaluator_model_path: None,
            ner_model_path: None,
            max_question_tokens: DEFAULT_MAX_QUESTION_TOKENS,
            segment_tokens: DEFAULT_SEGMENT_TOKENS,
            seed: None,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "QUIZGEN_PORT";
    const ENV_BIND_ADDR: &'static str = "QUIZGEN_BIND_ADDR";
    const ENV_DEVICE: &'static str = "QUIZGEN_DEVICE";
    const ENV_SEGMENT_TOKENS: &'static str = "QUIZGEN_SEGMENT_TOKENS";
    const ENV_SEED: &'static str = "QUIZGEN_SEED";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let device = Self::parse_device_from_env(defaults.device)?;
        let qg_model_path = Self::parse_optional_path_from_env(GeneratorConfig::ENV_MODEL_PATH);
        let evaluator_model_path =
            Self::parse_optional_path_from_env(EvaluatorConfig::ENV_MODEL_PATH);
        let ner_model_path = Self::parse_optional_path_from_env(NerConfig::ENV_MODEL_PATH);
        let max_question_tokens = Self::parse_positive_from_env(
            GeneratorConfig::ENV_MAX_QUESTION_TOKENS,
            defaults.max_question_tokens,
        )?;
        let segment_tokens =
            Self::parse_positive_from_env(Self::ENV_SEGMENT_TOKENS, defaults.segment_tokens)?;
        let seed = Self::parse_seed_from_env()?;

        Ok(Self {
            port,
            bind_addr,
            device,
            qg_model_path,
            evaluator_model_path,
            ner_model_path,
            max_question_tokens,
            segment_tokens,
            seed,
        })
    }

    /// Validates model paths and budgets (does not touch model files).
    pub fn validate(&self) -> Result<(), ConfigError> {
        for path in [
            &self.qg_model_path,
            &self.evaluator_model_path,
            &self.ner_model_path,
        ]
        .into_iter()
        .flatten()
        {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if self.max_question_tokens == 0 {
            return Err(ConfigError::InvalidNumber {
                name: GeneratorConfig::ENV_MAX_QUESTION_TOKENS,
                value: "0".to_string(),
            });
        }

        if self.segment_tokens == 0 {
            return Err(ConfigError::InvalidNumber {
                name: Self::ENV_SEGMENT_TOKENS,
                value: "0".to_string(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Question model settings derived from this config.
    pub fn generator_config(&self) -> GeneratorConfig {
        let config = match &self.qg_model_path {
            Some(path) => GeneratorConfig::new(path.clone()),
            None => GeneratorConfig::stub(),
        };
        config.with_max_question_tokens(self.max_question_tokens)
    }

    /// Evaluator settings derived from this config.
    pub fn evaluator_config(&self) -> EvaluatorConfig {
        match &self.evaluator_model_path {
            Some(path) => EvaluatorConfig::new(path.clone()),
            None => EvaluatorConfig::stub(),
        }
    }

    /// Entity recogniser settings derived from this config.
    pub fn ner_config(&self) -> NerConfig {
        match &self.ner_model_path {
            Some(path) => NerConfig::new(path.clone()),
            None => NerConfig::stub(),
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_device_from_env(default: DevicePreference) -> Result<DevicePreference, ConfigError> {
        match env::var(Self::ENV_DEVICE) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidDevice { value }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_positive_from_env(name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(name) {
            Ok(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => Ok(n),
                _ => Err(ConfigError::InvalidNumber { name, value }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_seed_from_env() -> Result<Option<u64>, ConfigError> {
        match env::var(Self::ENV_SEED) {
            Ok(value) if value.trim().is_empty() => Ok(None),
            Ok(value) => value
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::InvalidNumber {
                    name: Self::ENV_SEED,
                    value,
                }),
            Err(_) => Ok(None),
        }
    }
}
