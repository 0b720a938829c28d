//! Shared texts and mock-backed generators.

use quizgen::{
    EntitySpan, MockEntityRecognizer, MockPairScorer, MockQuestionModel, QuestionGenerator,
};

pub type MockGenerator = QuestionGenerator<MockQuestionModel, MockPairScorer, MockEntityRecognizer>;

pub const TWO_SENTENCES: &str = "The sky is blue. Grass is green.";

pub const HISTORY_TEXT: &str = "Ada Lovelace published the first algorithm in 1843.\n\
Charles Babbage designed the Analytical Engine in 1837.\n\
The engine was never completed during his lifetime.\n\
Alan Turing formalised computation in 1936.";

pub fn history_entities() -> Vec<EntitySpan> {
    vec![
        EntitySpan::new("Ada Lovelace", "PERSON"),
        EntitySpan::new("1843", "DATE"),
        EntitySpan::new("Charles Babbage", "PERSON"),
        EntitySpan::new("1837", "DATE"),
        EntitySpan::new("Alan Turing", "PERSON"),
        EntitySpan::new("1936", "DATE"),
    ]
}

pub fn mock_generator(scorer: MockPairScorer) -> MockGenerator {
    QuestionGenerator::new(
        MockQuestionModel::new(),
        scorer,
        MockEntityRecognizer::new(history_entities()),
    )
    .with_seed(2024)
}

/// `count` distinct short sentences on one line.
pub fn numbered_sentences(count: usize) -> String {
    (0..count)
        .map(|i| format!("Fact number {i} is worth remembering."))
        .collect::<Vec<_>>()
        .join(" ")
}
