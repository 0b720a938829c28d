use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_core::IndexOp;
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config};
use serde::Deserialize;

/// Label metadata that `candle_transformers`' BERT config does not carry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelConfig {
    #[serde(default)]
    pub id2label: Option<HashMap<String, String>>,
    #[serde(default)]
    pub num_labels: Option<usize>,
}

impl LabelConfig {
    /// Number of output classes (defaults to 2 like Hugging Face).
    pub fn num_labels(&self) -> usize {
        self.id2label
            .as_ref()
            .map(|m| m.len())
            .filter(|n| *n > 0)
            .or(self.num_labels)
            .unwrap_or(2)
    }

    /// Labels ordered by class id (`LABEL_{i}` for gaps).
    pub fn labels(&self) -> Vec<String> {
        let n = self.num_labels();
        (0..n)
            .map(|i| {
                self.id2label
                    .as_ref()
                    .and_then(|m| m.get(&i.to_string()).cloned())
                    .unwrap_or_else(|| format!("LABEL_{i}"))
            })
            .collect()
    }
}

fn read_configs(model_dir: &Path) -> Result<(Config, LabelConfig)> {
    let config_content = std::fs::read_to_string(model_dir.join("config.json"))?;
    let config: Config = serde_json::from_str(&config_content)
        .map_err(|e| candle::Error::Msg(format!("Failed to parse config: {}", e)))?;
    let labels: LabelConfig = serde_json::from_str(&config_content)
        .map_err(|e| candle::Error::Msg(format!("Failed to parse label config: {}", e)))?;
    Ok((config, labels))
}

fn load_encoder(vb: &VarBuilder, config: &Config) -> Result<BertModel> {
    if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
        BertModel::load(vb.pp("bert"), config)
    } else if vb.contains_tensor("roberta.embeddings.word_embeddings.weight") {
        BertModel::load(vb.pp("roberta"), config)
    } else {
        BertModel::load(vb.clone(), config)
    }
}

fn mmap_weights(model_dir: &Path, device: &Device) -> Result<VarBuilder<'static>> {
    let weights_path = model_dir.join("model.safetensors");
    // SAFETY: the weights file is not modified while the model is alive.
    unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device) }
}

struct BertForSequenceClassificationImpl {
    bert: BertModel,
    pooler: Option<Linear>,
    classifier: Linear,
}

impl BertForSequenceClassificationImpl {
    fn load(vb: VarBuilder, config: &Config, num_labels: usize) -> Result<Self> {
        let bert = load_encoder(&vb, config)?;

        let hidden_size = config.hidden_size;
        let pooler = if vb.contains_tensor("bert.pooler.dense.weight") {
            Some(candle_nn::linear(
                hidden_size,
                hidden_size,
                vb.pp("bert.pooler.dense"),
            )?)
        } else {
            None
        };
        let classifier = candle_nn::linear(hidden_size, num_labels, vb.pp("classifier"))?;

        Ok(Self {
            bert,
            pooler,
            classifier,
        })
    }

    fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        let output = self
            .bert
            .forward(input_ids, token_type_ids, attention_mask)?;
        let cls_token = output.i((.., 0, ..))?;
        let pooled = match &self.pooler {
            Some(dense) => dense.forward(&cls_token)?.tanh()?,
            None => cls_token,
        };
        self.classifier.forward(&pooled)
    }
}

/// BERT sequence classifier returning `[batch, num_labels]` logits.
#[derive(Clone)]
pub struct BertClassifier {
    inner: Arc<BertForSequenceClassificationImpl>,
    num_labels: usize,
}

impl BertClassifier {
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let (config, labels) = read_configs(model_dir)?;
        let num_labels = labels.num_labels();

        let vb = mmap_weights(model_dir, device)?;
        let model = BertForSequenceClassificationImpl::load(vb, &config, num_labels)?;

        Ok(Self {
            inner: Arc::new(model),
            num_labels,
        })
    }

    pub fn num_labels(&self) -> usize {
        self.num_labels
    }

    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        self.inner
            .forward(input_ids, token_type_ids, attention_mask)
    }
}

struct BertForTokenClassificationImpl {
    bert: BertModel,
    classifier: Linear,
}

/// BERT token classifier returning `[batch, seq_len, num_labels]` logits.
#[derive(Clone)]
pub struct BertTokenClassifier {
    inner: Arc<BertForTokenClassificationImpl>,
    labels: Vec<String>,
}

impl BertTokenClassifier {
    pub fn load<P: AsRef<Path>>(model_dir: P, device: &Device) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let (config, label_config) = read_configs(model_dir)?;
        let labels = label_config.labels();

        let vb = mmap_weights(model_dir, device)?;
        let bert = load_encoder(&vb, &config)?;
        let classifier = candle_nn::linear(config.hidden_size, labels.len(), vb.pp("classifier"))?;

        Ok(Self {
            inner: Arc::new(BertForTokenClassificationImpl { bert, classifier }),
            labels,
        })
    }

    /// Label names indexed by class id.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: Option<&Tensor>,
    ) -> Result<Tensor> {
        let hidden = self
            .inner
            .bert
            .forward(input_ids, token_type_ids, attention_mask)?;
        self.inner.classifier.forward(&hidden)
    }
}
