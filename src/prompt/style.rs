use std::fmt;
use std::str::FromStr;

use super::PromptError;

/// Which prompt-construction modes run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerStyle {
    /// Sentence prompts followed by entity prompts.
    #[default]
    All,
    /// Whole sentences as answers.
    Sentences,
    /// Named entities as answers, with distractors.
    MultipleChoice,
}

impl AnswerStyle {
    /// Returns `true` when sentence prompts are built.
    pub fn includes_sentences(self) -> bool {
        matches!(self, AnswerStyle::All | AnswerStyle::Sentences)
    }

    /// Returns `true` when entity prompts are built.
    pub fn includes_multiple_choice(self) -> bool {
        matches!(self, AnswerStyle::All | AnswerStyle::MultipleChoice)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnswerStyle::All => "all",
            AnswerStyle::Sentences => "sentences",
            AnswerStyle::MultipleChoice => "multiple_choice",
        }
    }
}

impl FromStr for AnswerStyle {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(AnswerStyle::All),
            "sentences" => Ok(AnswerStyle::Sentences),
            "multiple_choice" => Ok(AnswerStyle::MultipleChoice),
            other => Err(PromptError::invalid_style(other)),
        }
    }
}

impl fmt::Display for AnswerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
