pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use config::{EvaluatorConfig, GOOD_PAIR_LABEL};
pub use error::EvaluatorError;

use std::cmp::Ordering;

use candle_core::{Device, Tensor};
use tokenizers::Tokenizer;
use tracing::{debug, info, warn};

use crate::models::bert::BertClassifier;
use crate::models::traits::PairScorer;
use crate::models::utils::{fixed_length, load_tokenizer, missing_model_file};
use crate::qa::{Answer, ScoredCandidate};

/// Scores (question, answer) pairs with a BERT classifier (supports stub mode).
pub struct QaEvaluator {
    device: Device,
    config: EvaluatorConfig,
    model: Option<BertClassifier>,
    tokenizer: Option<Tokenizer>,
}

impl std::fmt::Debug for QaEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QaEvaluator")
            .field("device", &format!("{:?}", self.device))
            .field("config", &self.config)
            .field("model_loaded", &self.model.is_some())
            .finish()
    }
}

impl QaEvaluator {
    pub fn load(config: EvaluatorConfig, device: Device) -> Result<Self, EvaluatorError> {
        if let Err(msg) = config.validate() {
            return Err(EvaluatorError::InvalidConfig { reason: msg });
        }

        let Some(model_path) = config.model_path.clone() else {
            warn!("No evaluator model path configured, operating in stub mode");
            return Ok(Self {
                device,
                config,
                model: None,
                tokenizer: None,
            });
        };

        if !model_path.exists() {
            return Err(EvaluatorError::ModelNotFound { path: model_path });
        }
        if let Some(missing) = missing_model_file(&model_path) {
            return Err(EvaluatorError::ModelLoadFailed {
                reason: format!("Missing {} in {}", missing, model_path.display()),
            });
        }

        info!(model_path = %model_path.display(), "Loading QA evaluator model");

        let model = BertClassifier::load(&model_path, &device).map_err(|e| {
            EvaluatorError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;

        let tokenizer = load_tokenizer(&model_path)
            .and_then(|t| fixed_length(&t, config.seq_len))
            .map_err(|e| EvaluatorError::ModelLoadFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            })?;

        info!(
            num_labels = model.num_labels(),
            "QA evaluator model loaded successfully"
        );

        Ok(Self {
            device,
            config,
            model: Some(model),
            tokenizer: Some(tokenizer),
        })
    }

    pub fn stub() -> Result<Self, EvaluatorError> {
        Self::load(EvaluatorConfig::stub(), Device::Cpu)
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Scores a pair whose answer must be textual.
    pub fn score_answer(&self, question: &str, answer: &Answer) -> Result<f32, EvaluatorError> {
        match answer {
            Answer::Sentence(text) => self.score(question, text),
            Answer::MultipleChoice(_) => Err(EvaluatorError::InvalidInput {
                reason: "both question and answer must be text, got a multiple-choice answer"
                    .to_string(),
            }),
        }
    }

    /// Scores `(index, question, answer)` triples, best first.
    pub fn get_scores(
        &self,
        pairs: &[(usize, &str, &str)],
    ) -> Result<Vec<ScoredCandidate>, EvaluatorError> {
        score_pairs(self, pairs)
    }

    fn score_with_model(
        &self,
        model: &BertClassifier,
        tokenizer: &Tokenizer,
        question: &str,
        answer: &str,
    ) -> Result<f32, EvaluatorError> {
        let tokens = tokenizer.encode((question, answer), true).map_err(|e| {
            EvaluatorError::TokenizationFailed {
                reason: e.to_string(),
            }
        })?;

        let token_ids = Tensor::new(tokens.get_ids(), &self.device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(tokens.get_type_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(tokens.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        let logits = model
            .forward(&token_ids, &type_ids, Some(&attention_mask))
            .map_err(|e| EvaluatorError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let logits = logits.flatten_all()?.to_vec1::<f32>()?;
        let label = if logits.len() > GOOD_PAIR_LABEL {
            GOOD_PAIR_LABEL
        } else {
            0
        };

        logits
            .get(label)
            .copied()
            .ok_or_else(|| EvaluatorError::InferenceFailed {
                reason: "classifier returned no logits".to_string(),
            })
    }

    fn compute_placeholder_score(&self, question: &str, answer: &str) -> f32 {
        use std::collections::HashSet;

        let stop_words: HashSet<&str> = [
            "a", "an", "the", "is", "are", "was", "were", "be", "been", "has", "have", "had",
            "do", "does", "did", "to", "of", "in", "for", "on", "with", "at", "by", "from", "as",
            "and", "but", "or", "what", "which", "who", "whom", "when", "where", "why", "how",
            "this", "that", "these", "those", "it", "its", "say", "says", "about", "passage",
        ]
        .into_iter()
        .collect();

        let words = |text: &str| -> HashSet<String> {
            text.to_lowercase()
                .split(|c: char| !c.is_alphanumeric())
                .filter(|w| !w.is_empty() && !stop_words.contains(w))
                .map(str::to_string)
                .collect()
        };

        let question_words = words(question);
        let answer_words = words(answer);

        if question_words.is_empty() || answer_words.is_empty() {
            return 0.0;
        }

        let matches = question_words.intersection(&answer_words).count();
        let recall = matches as f32 / question_words.len() as f32;
        let union = question_words.union(&answer_words).count();
        let jaccard = matches as f32 / union as f32;

        let base_score = 0.6 * recall + 0.4 * jaccard;
        let normalized = 1.0 / (1.0 + (-8.0 * (base_score - 0.5)).exp());

        normalized.clamp(0.0, 1.0)
    }
}

impl PairScorer for QaEvaluator {
    fn score(&self, question: &str, answer: &str) -> Result<f32, EvaluatorError> {
        debug!(
            question_len = question.len(),
            answer_len = answer.len(),
            model_loaded = self.model.is_some(),
            "Scoring QA pair"
        );

        if let (Some(model), Some(tokenizer)) = (&self.model, &self.tokenizer) {
            return self.score_with_model(model, tokenizer, question, answer);
        }

        Ok(self.compute_placeholder_score(question, answer))
    }

    fn is_model_loaded(&self) -> bool {
        self.model.is_some()
    }
}

/// Scores each `(index, question, answer)` one at a time and sorts best first.
///
/// Ties keep their input order.
pub fn score_pairs<S: PairScorer + ?Sized>(
    scorer: &S,
    pairs: &[(usize, &str, &str)],
) -> Result<Vec<ScoredCandidate>, EvaluatorError> {
    let mut scored: Vec<ScoredCandidate> = pairs
        .iter()
        .map(|&(index, question, answer)| {
            let score = scorer.score(question, answer)?;
            Ok(ScoredCandidate { index, score })
        })
        .collect::<Result<Vec<_>, EvaluatorError>>()?;

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    debug!(
        scored = scored.len(),
        top_score = scored.first().map(|c| c.score),
        "Scored QA pairs"
    );

    Ok(scored)
}
