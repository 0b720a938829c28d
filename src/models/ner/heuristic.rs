//! Rule-based entity recognition used when no NER model is configured.
//!
//! Four-digit years become `DATE`, other numbers `CARDINAL`, and runs of
//! capitalised words `NAME`. Sentence-initial function words are not names.

use crate::qa::EntitySpan;

pub const LABEL_DATE: &str = "DATE";
pub const LABEL_CARDINAL: &str = "CARDINAL";
pub const LABEL_NAME: &str = "NAME";

const LEADING_WORDS: &[&str] = &[
    "A", "After", "An", "And", "As", "At", "Before", "But", "For", "He", "Her", "His", "However",
    "I", "If", "In", "It", "Its", "My", "On", "Our", "She", "So", "The", "Their", "There", "These",
    "They", "This", "Those", "We", "When", "While", "With",
];

fn trim_word(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

fn is_year(word: &str) -> bool {
    word.len() == 4
        && word.chars().all(|c| c.is_ascii_digit())
        && matches!(word.parse::<u32>(), Ok(1000..=2099))
}

fn is_number(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.')
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Extracts spans from one sentence, in order of appearance.
pub fn recognize_sentence(sentence: &str) -> Vec<EntitySpan> {
    let mut spans = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    let flush = |run: &mut Vec<&str>, spans: &mut Vec<EntitySpan>| {
        if !run.is_empty() {
            spans.push(EntitySpan::new(run.join(" "), LABEL_NAME));
            run.clear();
        }
    };

    for (position, raw) in sentence.split_whitespace().enumerate() {
        let word = trim_word(raw);
        if word.is_empty() {
            flush(&mut run, &mut spans);
            continue;
        }

        if is_year(word) {
            flush(&mut run, &mut spans);
            spans.push(EntitySpan::new(word, LABEL_DATE));
        } else if is_number(word) {
            flush(&mut run, &mut spans);
            spans.push(EntitySpan::new(word, LABEL_CARDINAL));
        } else if is_capitalized(word) && !(position == 0 && LEADING_WORDS.contains(&word)) {
            run.push(word);
        } else {
            flush(&mut run, &mut spans);
            continue;
        }

        // Trailing punctuation closes a name ("Paris, France" is two names).
        if raw.ends_with(|c: char| !c.is_alphanumeric()) {
            flush(&mut run, &mut spans);
        }
    }
    flush(&mut run, &mut spans);

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[EntitySpan]) -> Vec<(&str, &str)> {
        spans
            .iter()
            .map(|s| (s.text.as_str(), s.label.as_str()))
            .collect()
    }

    #[test]
    fn test_names_dates_and_numbers() {
        let spans = recognize_sentence("Ada Lovelace published 3 notes in 1843.");

        assert_eq!(
            texts(&spans),
            vec![
                ("Ada Lovelace", LABEL_NAME),
                ("3", LABEL_CARDINAL),
                ("1843", LABEL_DATE)
            ]
        );
    }

    #[test]
    fn test_leading_function_word_is_not_a_name() {
        let spans = recognize_sentence("The bridge crosses the Thames.");

        assert_eq!(texts(&spans), vec![("Thames", LABEL_NAME)]);
    }

    #[test]
    fn test_sentence_initial_name_is_kept() {
        let spans = recognize_sentence("Rust was first released in 2015.");

        assert_eq!(texts(&spans), vec![("Rust", LABEL_NAME), ("2015", LABEL_DATE)]);
    }

    #[test]
    fn test_comma_splits_names() {
        let spans = recognize_sentence("She moved to Paris, France last year.");

        assert_eq!(
            texts(&spans),
            vec![("Paris", LABEL_NAME), ("France", LABEL_NAME)]
        );
    }

    #[test]
    fn test_no_entities() {
        assert!(recognize_sentence("nothing to see here.").is_empty());
        assert!(recognize_sentence("").is_empty());
    }
}
