//! Prompt construction for the question model.
//!
//! Every prompt has the form `<answer> {span} <context> {context}`. Sentence
//! prompts use each sentence of a segment with the segment as context; entity
//! prompts use each recognised entity with its sentence as context and carry a
//! multiple-choice answer.

mod choices;
mod error;
mod style;


pub use choices::build_choices;
pub use error::PromptError;
pub use style::AnswerStyle;

use rand::Rng;

use crate::constants::{ANSWER_TOKEN, CONTEXT_TOKEN};
use crate::qa::{Answer, EntitySpan, QgInput};
use crate::text::{Segment, split_sentences};

/// Formats a question-generation prompt.
pub fn format_prompt(answer: &str, context: &str) -> String {
    format!("{ANSWER_TOKEN} {answer} {CONTEXT_TOKEN} {context}")
}

/// One prompt per sentence of each segment, segment order then sentence order.
pub fn sentence_inputs(segments: &[Segment]) -> Vec<QgInput> {
    segments
        .iter()
        .flat_map(|segment| {
            split_sentences(&segment.text)
                .into_iter()
                .map(move |sentence| QgInput {
                    prompt: format_prompt(&sentence, &segment.text),
                    answer: Answer::Sentence(sentence),
                })
        })
        .collect()
}

/// One prompt per entity of each sentence.
///
/// `entities[i]` holds the spans recognised in `sentences[i]`. Distractors
/// are drawn from every span of every sentence.
pub fn entity_inputs<R: Rng + ?Sized>(
    sentences: &[String],
    entities: &[Vec<EntitySpan>],
    rng: &mut R,
) -> Vec<QgInput> {
    let pool: Vec<EntitySpan> = entities.iter().flatten().cloned().collect();

    let mut inputs = Vec::new();
    for (sentence, spans) in sentences.iter().zip(entities) {
        for span in spans {
            inputs.push(QgInput {
                prompt: format_prompt(&span.text, sentence),
                answer: Answer::MultipleChoice(build_choices(span, &pool, rng)),
            });
        }
    }
    inputs
}
