use std::sync::Arc;

use crate::models::{
    EntityExtractor, EntityRecognizer, PairScorer, QaEvaluator, QuestionModel, T5QuestionModel,
};
use crate::pipeline::QuestionGenerator;

/// Shared handler state: one generator for every request.
pub struct HandlerState<G = T5QuestionModel, S = QaEvaluator, N = EntityExtractor>
where
    G: QuestionModel + 'static,
    S: PairScorer + 'static,
    N: EntityRecognizer + 'static,
{
    pub generator: Arc<QuestionGenerator<G, S, N>>,
}

impl<G, S, N> Clone for HandlerState<G, S, N>
where
    G: QuestionModel + 'static,
    S: PairScorer + 'static,
    N: EntityRecognizer + 'static,
{
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<G, S, N> HandlerState<G, S, N>
where
    G: QuestionModel + 'static,
    S: PairScorer + 'static,
    N: EntityRecognizer + 'static,
{
    pub fn new(generator: Arc<QuestionGenerator<G, S, N>>) -> Self {
        Self { generator }
    }
}
