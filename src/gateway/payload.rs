use serde::{Deserialize, Serialize};

use crate::qa::QaPair;

/// Selects the textual-answer partition as `questions`.
pub const QUESTION_TYPE_WITH_ANSWERS: &str = "with_answers";
/// Selects the multiple-choice partition as `questions`.
pub const QUESTION_TYPE_MULTIPLE_CHOICE: &str = "multiple_choice";

/// Body of `POST /v1/questions`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuestionsRequest {
    pub text: String,
    /// Absent means `questions` holds every pair, not just the multiple-choice ones.
    #[serde(default)]
    pub question_type: Option<String>,
    #[serde(default)]
    pub num_questions: Option<usize>,
    #[serde(default)]
    pub answer_style: Option<String>,
    #[serde(default)]
    pub use_evaluator: Option<bool>,
    #[serde(default)]
    pub score_multiple_choice: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuestionsResponse {
    pub id: String,
    pub created: i64,
    pub question_type: Option<String>,
    /// Partition selected by `question_type`, or every pair when it is absent.
    pub questions: Vec<QaPair>,
    pub simple_answer_questions: Vec<QaPair>,
    pub multiple_choice_questions: Vec<QaPair>,
}

impl QuestionsResponse {
    /// Partitions ranked pairs by answer kind, keeping rank order in each part.
    pub fn from_pairs(pairs: Vec<QaPair>, question_type: Option<String>) -> Self {
        let (multiple_choice_questions, simple_answer_questions): (Vec<_>, Vec<_>) = pairs
            .iter()
            .cloned()
            .partition(|pair| pair.answer.is_multiple_choice());

        let questions = match question_type.as_deref() {
            None => pairs,
            Some(QUESTION_TYPE_WITH_ANSWERS) => simple_answer_questions.clone(),
            Some(_) => multiple_choice_questions.clone(),
        };

        Self {
            id: format!("qa-{}", uuid::Uuid::new_v4()),
            created: chrono::Utc::now().timestamp(),
            question_type,
            questions,
            simple_answer_questions,
            multiple_choice_questions,
        }
    }
}
