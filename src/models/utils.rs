use std::io;
use std::path::Path;
use tokenizers::{PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};

/// Loads a tokenizer from a model directory or explicit tokenizer.json path.
pub fn load_tokenizer(model_path: &Path) -> io::Result<Tokenizer> {
    let tokenizer_path = if model_path
        .file_name()
        .is_some_and(|name| name == std::ffi::OsStr::new("tokenizer.json"))
    {
        model_path.to_path_buf()
    } else if model_path.is_dir() {
        model_path.join("tokenizer.json")
    } else {
        model_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Model path has no parent"))?
            .join("tokenizer.json")
    };

    Tokenizer::from_file(&tokenizer_path).map_err(io::Error::other)
}

/// Returns a copy of `tokenizer` that truncates and pads every input to exactly `max_len`.
///
/// The pad token is taken from the tokenizer's own padding setup when present,
/// else from the vocabulary (`<pad>` for T5, `[PAD]` for BERT).
pub fn fixed_length(tokenizer: &Tokenizer, max_len: usize) -> io::Result<Tokenizer> {
    let mut tokenizer = tokenizer.clone();

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };
    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;

    let (pad_token, pad_id) = match tokenizer.get_padding() {
        Some(existing) => (existing.pad_token.clone(), existing.pad_id),
        None => ["<pad>", "[PAD]"]
            .iter()
            .find_map(|t| tokenizer.token_to_id(t).map(|id| (t.to_string(), id)))
            .unwrap_or_else(|| ("<pad>".to_string(), 0)),
    };

    tokenizer.with_padding(Some(PaddingParams {
        strategy: PaddingStrategy::Fixed(max_len),
        pad_id,
        pad_token,
        ..Default::default()
    }));

    Ok(tokenizer)
}

/// Returns a copy of `tokenizer` that truncates to `max_len` without padding.
///
/// T5 `encode` takes no attention mask, so pad positions would be attended to.
pub fn truncating(tokenizer: &Tokenizer, max_len: usize) -> io::Result<Tokenizer> {
    let mut tokenizer = tokenizer.clone();
    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };
    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;
    tokenizer.with_padding(None);
    Ok(tokenizer)
}

/// Returns a copy of `tokenizer` with truncation and padding disabled (raw lengths).
pub fn unbounded(tokenizer: &Tokenizer) -> io::Result<Tokenizer> {
    let mut tokenizer = tokenizer.clone();
    tokenizer
        .with_truncation(None)
        .map_err(|e| io::Error::other(format!("Failed to disable truncation: {}", e)))?;
    tokenizer.with_padding(None);
    Ok(tokenizer)
}

/// Checks that `dir` holds `config.json`, `model.safetensors` and `tokenizer.json`.
pub fn missing_model_file(dir: &Path) -> Option<&'static str> {
    ["config.json", "model.safetensors", "tokenizer.json"]
        .into_iter()
        .find(|name| !dir.join(name).exists())
}
