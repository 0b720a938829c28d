use super::*;
use crate::qa::Choice;
use std::path::PathBuf;

#[test]
fn test_config_default() {
    let config = EvaluatorConfig::default();

    assert!(config.model_path.is_none());
    assert_eq!(config.seq_len, crate::constants::EVALUATOR_SEQ_LEN);
}

#[test]
fn test_config_validate() {
    assert!(EvaluatorConfig::default().validate().is_ok());

    let invalid = EvaluatorConfig {
        seq_len: 0,
        ..Default::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_stub_evaluator_creation() {
    let evaluator = QaEvaluator::stub().unwrap();

    assert!(!evaluator.is_model_loaded());
}

#[test]
fn test_load_with_missing_model() {
    let config = EvaluatorConfig::new("/nonexistent/path/bert-qa-evaluator");
    let result = QaEvaluator::load(config, Device::Cpu);

    assert!(matches!(
        result.unwrap_err(),
        EvaluatorError::ModelNotFound { .. }
    ));
}

#[test]
fn test_load_invalid_config() {
    let config = EvaluatorConfig {
        seq_len: 0,
        ..Default::default()
    };
    let result = QaEvaluator::load(config, Device::Cpu);

    assert!(matches!(
        result.unwrap_err(),
        EvaluatorError::InvalidConfig { .. }
    ));
}

#[test]
fn test_score_range_and_determinism() {
    let evaluator = QaEvaluator::stub().unwrap();

    let first = evaluator
        .score("When was Rust released?", "Rust 1.0 was released in 2015.")
        .unwrap();
    let second = evaluator
        .score("When was Rust released?", "Rust 1.0 was released in 2015.")
        .unwrap();

    assert_eq!(first, second);
    assert!((0.0..=1.0).contains(&first));
}

#[test]
fn test_related_pair_scores_higher() {
    let evaluator = QaEvaluator::stub().unwrap();

    let related = evaluator
        .score("When was Rust released?", "Rust was released in 2015.")
        .unwrap();
    let unrelated = evaluator
        .score("When was Rust released?", "Bananas are yellow.")
        .unwrap();

    assert!(related > unrelated);
}

#[test]
fn test_score_answer_rejects_multiple_choice() {
    let evaluator = QaEvaluator::stub().unwrap();
    let answer = Answer::MultipleChoice(vec![Choice::correct("Paris"), Choice::distractor("Rome")]);

    let err = evaluator.score_answer("Where?", &answer).unwrap_err();

    assert!(matches!(err, EvaluatorError::InvalidInput { .. }));
    assert!(err.to_string().contains("invalid scoring input"));
}

#[test]
fn test_score_answer_accepts_sentence() {
    let evaluator = QaEvaluator::stub().unwrap();
    let answer = Answer::Sentence("Paris is the capital of France.".to_string());

    let score = evaluator
        .score_answer("What is the capital of France?", &answer)
        .unwrap();

    assert!(score > 0.0);
}

#[test]
fn test_get_scores_sorted_descending_with_original_indices() {
    let evaluator = QaEvaluator::stub().unwrap();

    let pairs = [
        (0, "What about bananas?", "Rust is fast."),
        (3, "What about Rust speed?", "Rust is fast."),
        (7, "What about Rust?", "Rust is fast and safe."),
    ];
    let scores = evaluator.get_scores(&pairs).unwrap();

    assert_eq!(scores.len(), 3);
    assert!(scores[0].score >= scores[1].score);
    assert!(scores[1].score >= scores[2].score);
    assert_eq!(scores[2].index, 0);

    let mut indices: Vec<usize> = scores.iter().map(|s| s.index).collect();
    indices.sort();
    assert_eq!(indices, vec![0, 3, 7]);
}

#[test]
fn test_get_scores_empty() {
    let evaluator = QaEvaluator::stub().unwrap();

    assert!(evaluator.get_scores(&[]).unwrap().is_empty());
}

#[test]
fn test_error_messages_descriptive() {
    let err = EvaluatorError::ModelNotFound {
        path: PathBuf::from("/some/path"),
    };
    assert!(err.to_string().contains("/some/path"));
}
