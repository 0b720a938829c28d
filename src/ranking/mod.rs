//! Selection of the final QA pairs from evaluator scores.

#[cfg(test)]
mod tests;

use tracing::warn;

use crate::qa::{Answer, QaPair, ScoredCandidate};

/// Ranked selection of QA pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    /// Selected pairs, best score first.
    pub pairs: Vec<QaPair>,
    /// Number of pairs that were asked for.
    pub requested: usize,
}

impl Ranked {
    /// How many requested pairs could not be produced.
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.pairs.len())
    }
}

/// Picks the `num_questions` best-scored pairs.
///
/// Only indices present in `scores` are eligible. Asking for more pairs than
/// were scored returns every scored pair and records the shortfall.
pub fn rank_qa_pairs(
    questions: &[String],
    answers: &[Answer],
    scores: &[ScoredCandidate],
    num_questions: usize,
) -> Ranked {
    let mut ordered = scores.to_vec();
    ordered.sort_by(|a, b| b.score.total_cmp(&a.score));

    let pairs: Vec<QaPair> = ordered
        .iter()
        .filter_map(|c| {
            let question = questions.get(c.index)?;
            let answer = answers.get(c.index)?;
            Some(QaPair::new(question.clone(), answer.clone()))
        })
        .take(num_questions)
        .collect();

    let ranked = Ranked {
        pairs,
        requested: num_questions,
    };

    if ranked.shortfall() > 0 {
        warn!(
            requested = num_questions,
            available = ranked.pairs.len(),
            "Was only able to generate {} questions; for more questions, please input a longer text",
            ranked.pairs.len()
        );
    }

    ranked
}

/// Every pair in generation order.
pub fn all_qa_pairs(questions: Vec<String>, answers: Vec<Answer>) -> Vec<QaPair> {
    questions
        .into_iter()
        .zip(answers)
        .map(|(question, answer)| QaPair { question, answer })
        .collect()
}
