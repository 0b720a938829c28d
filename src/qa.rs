//! Value types flowing through the pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of a multiple-choice answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Choice text.
    pub answer: String,
    /// `true` for the designated answer.
    pub correct: bool,
}

impl Choice {
    /// Creates the correct choice.
    pub fn correct(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            correct: true,
        }
    }

    /// Creates a distractor.
    pub fn distractor(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            correct: false,
        }
    }
}

/// Designated answer of a QA pair.
///
/// Serialized untagged: a plain string or a list of [`Choice`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// A sentence taken verbatim from the input.
    Sentence(String),
    /// A shuffled list of choices with exactly one correct entry.
    MultipleChoice(Vec<Choice>),
}

impl Answer {
    /// Returns the answer text when it is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Sentence(text) => Some(text),
            Answer::MultipleChoice(_) => None,
        }
    }

    /// Returns the text of the correct choice (or the sentence itself).
    pub fn correct_text(&self) -> Option<&str> {
        match self {
            Answer::Sentence(text) => Some(text),
            Answer::MultipleChoice(choices) => choices
                .iter()
                .find(|c| c.correct)
                .map(|c| c.answer.as_str()),
        }
    }

    /// Returns `true` for multiple-choice answers.
    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, Answer::MultipleChoice(_))
    }
}

impl fmt::Display for Answer {
    /// Multiple-choice answers render one choice per line, the correct one marked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Sentence(text) => f.write_str(text),
            Answer::MultipleChoice(choices) => {
                for (i, choice) in choices.iter().enumerate() {
                    let marker = if choice.correct { " (correct)" } else { "" };
                    write!(f, "\n  {}. {}{}", i + 1, choice.answer, marker)?;
                }
                Ok(())
            }
        }
    }
}

/// A generated question paired with its designated answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    /// Generated question.
    pub question: String,
    /// Designated answer.
    pub answer: Answer,
}

impl QaPair {
    /// Creates a pair.
    pub fn new(question: impl Into<String>, answer: Answer) -> Self {
        Self {
            question: question.into(),
            answer,
        }
    }
}

/// Renders pairs as numbered `question` / `answer:` blocks separated by blank lines.
pub fn render_qa(pairs: &[QaPair]) -> String {
    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| format!("{}) {}\nanswer: {}\n\n", i + 1, pair.question, pair.answer))
        .collect()
}

/// Prompt for the question model together with the answer it was built around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QgInput {
    /// `<answer> {span} <context> {context}`.
    pub prompt: String,
    /// Answer the generated question should have.
    pub answer: Answer,
}

/// Evaluator score of the QA pair at `index` in the generation list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    /// Position in the full list of generated pairs.
    pub index: usize,
    /// Raw classifier logit.
    pub score: f32,
}

/// Typed span returned by entity recognition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Surface text.
    pub text: String,
    /// Entity type (e.g. `PER`, `ORG`, `DATE`).
    pub label: String,
}

impl EntitySpan {
    /// Creates a span.
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}
