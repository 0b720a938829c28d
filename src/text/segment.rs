use std::ops::Range;

use tracing::debug;

use crate::models::generator::GeneratorError;
use crate::models::traits::TokenCounter;

/// Consecutive paragraphs packed under a token budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Paragraphs joined by a single space.
    pub text: String,
    /// Indices into [`paragraphs`] of the source text.
    pub paragraphs: Range<usize>,
    /// Sum of the paragraphs' encoded lengths.
    pub token_count: usize,
}

/// Non-empty lines of `text`, in order.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split('\n').filter(|p| !p.is_empty()).collect()
}

/// Greedily packs paragraphs into segments of at most `max_tokens` tokens.
///
/// Boundaries fall only between paragraphs and every paragraph lands in
/// exactly one segment, in document order. A paragraph longer than the budget
/// on its own forms a single oversized segment.
pub fn split_into_segments<C: TokenCounter + ?Sized>(
    text: &str,
    max_tokens: usize,
    counter: &C,
) -> Result<Vec<Segment>, GeneratorError> {
    let paragraphs = paragraphs(text);
    let lengths = paragraphs
        .iter()
        .map(|p| counter.count_tokens(p))
        .collect::<Result<Vec<_>, _>>()?;

    let mut segments = Vec::new();
    let mut start = 0;
    let mut tokens = 0;

    for (idx, &len) in lengths.iter().enumerate() {
        if idx > start && tokens + len > max_tokens {
            segments.push(build_segment(&paragraphs, start..idx, tokens));
            start = idx;
            tokens = 0;
        }
        tokens += len;
    }
    if start < paragraphs.len() {
        segments.push(build_segment(&paragraphs, start..paragraphs.len(), tokens));
    }

    debug!(
        paragraphs = paragraphs.len(),
        segments = segments.len(),
        max_tokens,
        "Split text into segments"
    );

    Ok(segments)
}

fn build_segment(paragraphs: &[&str], range: Range<usize>, token_count: usize) -> Segment {
    Segment {
        text: paragraphs[range.clone()].join(" "),
        paragraphs: range,
        token_count,
    }
}
