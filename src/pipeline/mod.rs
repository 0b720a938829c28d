//! End-to-end question generation.
//!
//! [`QuestionGenerator`] owns the three models and runs
//! prompts → questions → scores → ranking for one text at a time.
//!
//! ```no_run
//! use quizgen::{Config, GenerateOptions, QuestionGenerator};
//!
//! let generator = QuestionGenerator::from_config(&Config::default())?;
//! let pairs = generator.generate("The sky is blue. Grass is green.", &GenerateOptions::new())?;
//! for pair in pairs {
//!     println!("{}", pair.question);
//! }
//! # Ok::<(), quizgen::PipelineError>(())
//! ```

mod error;
mod options;

#[cfg(test)]
mod tests;

pub use error::PipelineError;
pub use options::GenerateOptions;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::constants::{DEFAULT_NUM_QUESTIONS, DEFAULT_SEGMENT_TOKENS};
use crate::models::{
    EntityExtractor, EntityRecognizer, PairScorer, QaEvaluator, QuestionModel, T5QuestionModel,
    score_pairs, select_device,
};
use crate::prompt::{self, AnswerStyle};
use crate::qa::{Answer, QaPair, QgInput};
use crate::ranking::{all_qa_pairs, rank_qa_pairs};
use crate::text::{split_into_segments, split_sentences};

/// Question-answer generator over a question model, a pair scorer and an
/// entity recogniser.
pub struct QuestionGenerator<G = T5QuestionModel, S = QaEvaluator, N = EntityExtractor> {
    question_model: G,
    scorer: S,
    recognizer: N,
    segment_tokens: usize,
    rng: Mutex<StdRng>,
}

impl<G, S, N> std::fmt::Debug for QuestionGenerator<G, S, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestionGenerator")
            .field("segment_tokens", &self.segment_tokens)
            .finish_non_exhaustive()
    }
}

impl QuestionGenerator {
    /// Resolves the device once and loads every model against it.
    ///
    /// Models without a configured path run in stub mode.
    pub fn from_config(config: &Config) -> Result<Self, PipelineError> {
        let device = select_device(config.device)?;

        let question_model = T5QuestionModel::load(config.generator_config(), device.clone())?;
        let scorer = QaEvaluator::load(config.evaluator_config(), device.clone())?;
        let recognizer = EntityExtractor::load(config.ner_config(), device)?;

        info!(
            device = %config.device,
            generator_loaded = QuestionModel::is_model_loaded(&question_model),
            evaluator_loaded = PairScorer::is_model_loaded(&scorer),
            ner_loaded = EntityRecognizer::is_model_loaded(&recognizer),
            "Question generator ready"
        );

        let generator = Self::new(question_model, scorer, recognizer)
            .with_segment_tokens(config.segment_tokens);
        Ok(match config.seed {
            Some(seed) => generator.with_seed(seed),
            None => generator,
        })
    }
}

impl<G, S, N> QuestionGenerator<G, S, N>
where
    G: QuestionModel,
    S: PairScorer,
    N: EntityRecognizer,
{
    /// Creates a generator from already loaded models.
    pub fn new(question_model: G, scorer: S, recognizer: N) -> Self {
        Self {
            question_model,
            scorer,
            recognizer,
            segment_tokens: DEFAULT_SEGMENT_TOKENS,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Sets the token budget per context segment.
    pub fn with_segment_tokens(mut self, segment_tokens: usize) -> Self {
        self.segment_tokens = segment_tokens;
        self
    }

    /// Seeds distractor sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn question_model(&self) -> &G {
        &self.question_model
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn recognizer(&self) -> &N {
        &self.recognizer
    }

    /// Generates QA pairs for `text`.
    ///
    /// With the evaluator on, pairs are ranked by score and the top
    /// `num_questions` (default 10) are returned; multiple-choice pairs only
    /// take part when `score_multiple_choice` is set. With the evaluator off,
    /// every pair is returned in generation order.
    #[instrument(skip(self, text), fields(text_len = text.len(), style = %options.answer_style))]
    pub fn generate(
        &self,
        text: &str,
        options: &GenerateOptions,
    ) -> Result<Vec<QaPair>, PipelineError> {
        let inputs = self.generate_qg_inputs(text, options.answer_style)?;
        let questions = self.generate_questions_from_inputs(&inputs)?;

        if questions.len() != inputs.len() {
            return Err(PipelineError::CountMismatch {
                questions: questions.len(),
                answers: inputs.len(),
            });
        }

        let answers: Vec<Answer> = inputs.into_iter().map(|input| input.answer).collect();

        if !options.use_evaluator {
            info!(pairs = questions.len(), "Skipping evaluation step");
            return Ok(all_qa_pairs(questions, answers));
        }

        let candidates: Vec<(usize, &str, &str)> = questions
            .iter()
            .zip(&answers)
            .enumerate()
            .filter_map(|(index, (question, answer))| {
                let text = if options.score_multiple_choice {
                    answer.correct_text()
                } else {
                    answer.as_text()
                };
                text.map(|text| (index, question.as_str(), text))
            })
            .collect();

        let scores = score_pairs(&self.scorer, &candidates)?;
        let num_questions = options.num_questions.unwrap_or(DEFAULT_NUM_QUESTIONS);
        let ranked = rank_qa_pairs(&questions, &answers, &scores, num_questions);

        info!(
            generated = questions.len(),
            scored = scores.len(),
            selected = ranked.pairs.len(),
            "Ranked QA pairs"
        );

        Ok(ranked.pairs)
    }

    /// Builds prompts and designated answers for `style`.
    ///
    /// Sentence prompts come first (segment order, then sentence order),
    /// followed by entity prompts.
    pub fn generate_qg_inputs(
        &self,
        text: &str,
        style: AnswerStyle,
    ) -> Result<Vec<QgInput>, PipelineError> {
        let mut inputs = Vec::new();

        if style.includes_sentences() {
            let segments = split_into_segments(text, self.segment_tokens, &self.question_model)?;
            inputs.extend(prompt::sentence_inputs(&segments));
        }

        if style.includes_multiple_choice() {
            let sentences = split_sentences(text);
            let entities = self.recognizer.recognize(&sentences)?;
            let mut rng = self.rng.lock();
            inputs.extend(prompt::entity_inputs(&sentences, &entities, &mut *rng));
        }

        debug!(inputs = inputs.len(), style = %style, "Built question-generation inputs");
        Ok(inputs)
    }

    /// Parses `style` before building any prompt.
    pub fn generate_qg_inputs_str(
        &self,
        text: &str,
        style: &str,
    ) -> Result<Vec<QgInput>, PipelineError> {
        let style: AnswerStyle = style.parse()?;
        self.generate_qg_inputs(text, style)
    }

    /// Generates one question per input, in input order.
    pub fn generate_questions_from_inputs(
        &self,
        inputs: &[QgInput],
    ) -> Result<Vec<String>, PipelineError> {
        inputs
            .iter()
            .map(|input| {
                self.question_model
                    .generate_question(&input.prompt)
                    .map_err(PipelineError::from)
            })
            .collect()
    }
}
