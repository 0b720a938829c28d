use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::constants::MAX_CHOICES;
use crate::qa::{Choice, EntitySpan};

/// Builds a shuffled multiple-choice answer around `correct`.
///
/// Distractors come from `pool`, deduplicated by text in first-seen order and
/// never sharing the correct text. Spans with the correct label are preferred;
/// the rest is topped up from other labels. Sampling is without replacement.
pub fn build_choices<R: Rng + ?Sized>(
    correct: &EntitySpan,
    pool: &[EntitySpan],
    rng: &mut R,
) -> Vec<Choice> {
    let mut seen = HashSet::new();
    let candidates: Vec<&EntitySpan> = pool
        .iter()
        .filter(|span| span.text != correct.text)
        .filter(|span| seen.insert(span.text.as_str()))
        .collect();

    let wanted = (MAX_CHOICES - 1).min(candidates.len());
    let (same_label, other_label): (Vec<&EntitySpan>, Vec<&EntitySpan>) = candidates
        .into_iter()
        .partition(|span| span.label == correct.label);

    let mut distractors: Vec<&EntitySpan> = same_label
        .choose_multiple(rng, wanted)
        .copied()
        .collect();
    if distractors.len() < wanted {
        let missing = wanted - distractors.len();
        distractors.extend(other_label.choose_multiple(rng, missing).copied());
    }

    let mut choices = Vec::with_capacity(distractors.len() + 1);
    choices.push(Choice::correct(correct.text.clone()));
    choices.extend(distractors.into_iter().map(|span| Choice::distractor(span.text.clone())));
    choices.shuffle(rng);
    choices
}
