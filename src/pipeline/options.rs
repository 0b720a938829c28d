use crate::prompt::AnswerStyle;

/// Options for [`QuestionGenerator::generate`](super::QuestionGenerator::generate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Rank pairs with the evaluator. Default: `true`.
    pub use_evaluator: bool,
    /// Number of ranked pairs; `None` ranks the default top 10.
    /// Ignored when the evaluator is off.
    pub num_questions: Option<usize>,
    /// Prompt modes to run. Default: [`AnswerStyle::All`].
    pub answer_style: AnswerStyle,
    /// Score multiple-choice pairs by their correct choice so they can be
    /// ranked. Default: `false` (only textual answers are ranked).
    pub score_multiple_choice: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            use_evaluator: true,
            num_questions: None,
            answer_style: AnswerStyle::All,
            score_multiple_choice: false,
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_evaluator(mut self, use_evaluator: bool) -> Self {
        self.use_evaluator = use_evaluator;
        self
    }

    pub fn with_num_questions(mut self, num_questions: usize) -> Self {
        self.num_questions = Some(num_questions);
        self
    }

    pub fn with_answer_style(mut self, answer_style: AnswerStyle) -> Self {
        self.answer_style = answer_style;
        self
    }

    pub fn with_score_multiple_choice(mut self, score_multiple_choice: bool) -> Self {
        self.score_multiple_choice = score_multiple_choice;
        self
    }
}
