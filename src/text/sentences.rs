use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{MAX_SENTENCE_CHARS, MIN_CUT_WORDS};

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*?[.!?]").expect("sentence pattern is valid"));

static INNER_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;:)]").expect("inner punctuation pattern is valid"));

/// Extracts candidate answer sentences from `text`.
///
/// Units are punctuation-terminated runs within a line. Units longer than
/// [`MAX_SENTENCE_CHARS`] are also cut on `, ; : )` and the pieces with more
/// than [`MIN_CUT_WORDS`] words are added. Originals are always kept. The
/// result is trimmed and deduplicated in first-occurrence order.
pub fn split_sentences(text: &str) -> Vec<String> {
    let originals: Vec<&str> = SENTENCE.find_iter(text).map(|m| m.as_str()).collect();

    let cuts = originals
        .iter()
        .filter(|s| s.chars().count() > MAX_SENTENCE_CHARS)
        .flat_map(|s| INNER_PUNCT.split(*s))
        .filter(|piece| piece.split_whitespace().count() > MIN_CUT_WORDS);

    let mut seen = HashSet::new();
    originals
        .iter()
        .copied()
        .chain(cuts)
        .map(|s| s.trim_matches(' '))
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(*s))
        .map(str::to_string)
        .collect()
}
