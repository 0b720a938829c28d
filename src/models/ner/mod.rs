//! Named-entity recognition (BERT token classification or heuristic rules).

pub mod config;
pub mod error;
pub mod heuristic;


pub use config::{NER_MAX_SEQ_LEN, NerConfig};
pub use error::NerError;

use candle_core::{D, Device, Tensor};
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{debug, info, warn};

use crate::models::bert::BertTokenClassifier;
use crate::models::traits::EntityRecognizer;
use crate::models::utils::{load_tokenizer, missing_model_file};
use crate::qa::EntitySpan;

/// Entity recogniser backed by a BERT NER model, or by [`heuristic`] rules in stub mode.
pub struct EntityExtractor {
    device: Device,
    config: NerConfig,
    model: Option<(BertTokenClassifier, Tokenizer)>,
}

impl std::fmt::Debug for EntityExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityExtractor")
            .field("device", &format!("{:?}", self.device))
            .field("config", &self.config)
            .field("model_loaded", &self.model.is_some())
            .finish()
    }
}

impl EntityExtractor {
    pub fn load(config: NerConfig, device: Device) -> Result<Self, NerError> {
        if let Err(msg) = config.validate() {
            return Err(NerError::InvalidConfig { reason: msg });
        }

        let Some(model_path) = config.model_path.clone() else {
            warn!("No NER model path configured, using heuristic entity rules");
            return Ok(Self {
                device,
                config,
                model: None,
            });
        };

        if !model_path.exists() {
            return Err(NerError::ModelNotFound { path: model_path });
        }
        if let Some(missing) = missing_model_file(&model_path) {
            return Err(NerError::ModelLoadFailed {
                reason: format!("Missing {} in {}", missing, model_path.display()),
            });
        }

        info!(model_path = %model_path.display(), "Loading NER model");

        let classifier = BertTokenClassifier::load(&model_path, &device).map_err(|e| {
            NerError::ModelLoadFailed {
                reason: format!("Failed to load BERT token classifier: {}", e),
            }
        })?;

        let mut tokenizer = load_tokenizer(&model_path)?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: NER_MAX_SEQ_LEN,
                ..Default::default()
            }))
            .map_err(|e| NerError::ModelLoadFailed {
                reason: format!("Failed to configure truncation: {}", e),
            })?;
        tokenizer.with_padding(None);

        info!(
            labels = classifier.labels().len(),
            "NER model loaded successfully"
        );

        Ok(Self {
            device,
            config,
            model: Some((classifier, tokenizer)),
        })
    }

    pub fn stub() -> Result<Self, NerError> {
        Self::load(NerConfig::stub(), Device::Cpu)
    }

    pub fn config(&self) -> &NerConfig {
        &self.config
    }

    fn recognize_with_model(
        &self,
        classifier: &BertTokenClassifier,
        tokenizer: &Tokenizer,
        sentence: &str,
    ) -> Result<Vec<EntitySpan>, NerError> {
        let encoding =
            tokenizer
                .encode(sentence, true)
                .map_err(|e| NerError::TokenizationFailed {
                    reason: e.to_string(),
                })?;
        if encoding.is_empty() {
            return Ok(Vec::new());
        }

        let ids = Tensor::new(encoding.get_ids(), &self.device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(encoding.get_type_ids(), &self.device)?.unsqueeze(0)?;
        let mask = Tensor::new(encoding.get_attention_mask(), &self.device)?.unsqueeze(0)?;

        let logits = classifier.forward(&ids, &type_ids, Some(&mask))?;
        let predictions = logits.squeeze(0)?.argmax(D::Minus1)?.to_vec1::<u32>()?;

        let tags: Vec<Option<&str>> = predictions
            .iter()
            .zip(encoding.get_special_tokens_mask())
            .map(|(&class, &special)| {
                if special == 1 {
                    None
                } else {
                    classifier.labels().get(class as usize).map(String::as_str)
                }
            })
            .collect();

        Ok(decode_bio(sentence, &tags, encoding.get_offsets()))
    }
}

impl EntityRecognizer for EntityExtractor {
    fn recognize(&self, sentences: &[String]) -> Result<Vec<Vec<EntitySpan>>, NerError> {
        debug!(
            sentences = sentences.len(),
            model_loaded = self.model.is_some(),
            "Recognizing entities"
        );

        sentences
            .iter()
            .map(|sentence| match &self.model {
                Some((classifier, tokenizer)) => {
                    self.recognize_with_model(classifier, tokenizer, sentence)
                }
                None => Ok(heuristic::recognize_sentence(sentence)),
            })
            .collect()
    }

    fn is_model_loaded(&self) -> bool {
        self.model.is_some()
    }
}

/// Groups per-token BIO tags into spans over `text`.
///
/// `tags[i]` is `None` for special tokens; `offsets[i]` are byte offsets into
/// `text`. Word pieces glued to the previous token continue its span.
pub fn decode_bio(text: &str, tags: &[Option<&str>], offsets: &[(usize, usize)]) -> Vec<EntitySpan> {
    struct Open<'a> {
        label: &'a str,
        start: usize,
        end: usize,
    }

    fn close(text: &str, open: &mut Option<Open<'_>>, spans: &mut Vec<EntitySpan>) {
        if let Some(o) = open.take()
            && let Some(slice) = text.get(o.start..o.end)
        {
            let slice = slice.trim();
            if !slice.is_empty() {
                spans.push(EntitySpan::new(slice, o.label));
            }
        }
    }

    let mut spans = Vec::new();
    let mut open: Option<Open<'_>> = None;

    for (tag, &(start, end)) in tags.iter().zip(offsets) {
        let Some(tag) = *tag else {
            close(text, &mut open, &mut spans);
            continue;
        };

        let glued = text
            .get(start..end)
            .and_then(|piece| piece.chars().next())
            .is_some_and(char::is_alphanumeric);
        let continues_word = glued && open.as_ref().is_some_and(|o| o.end == start);

        let (prefix, label) = match tag.split_once('-') {
            Some((p, l)) if p == "B" || p == "I" => (p, l),
            _ => ("I", tag),
        };

        if label == "O" {
            match open.as_mut() {
                Some(o) if continues_word => o.end = end,
                _ => close(text, &mut open, &mut spans),
            }
            continue;
        }

        match open.as_mut() {
            Some(o) if continues_word => o.end = end,
            Some(o) if prefix == "I" && o.label == label => o.end = end,
            _ => {
                close(text, &mut open, &mut spans);
                open = Some(Open { label, start, end });
            }
        }
    }
    close(text, &mut open, &mut spans);

    spans
}
