use super::*;
use crate::qa::Choice;

fn fixture(n: usize) -> (Vec<String>, Vec<Answer>) {
    let questions = (0..n).map(|i| format!("question {i}?")).collect();
    let answers = (0..n).map(|i| Answer::Sentence(format!("answer {i}."))).collect();
    (questions, answers)
}

fn scored(index: usize, score: f32) -> ScoredCandidate {
    ScoredCandidate { index, score }
}

#[test]
fn test_top_n_by_descending_score() {
    let (questions, answers) = fixture(4);
    let scores = vec![scored(0, 0.1), scored(1, 0.9), scored(2, 0.5), scored(3, 0.7)];

    let ranked = rank_qa_pairs(&questions, &answers, &scores, 2);

    assert_eq!(ranked.pairs.len(), 2);
    assert_eq!(ranked.pairs[0].question, "question 1?");
    assert_eq!(ranked.pairs[1].question, "question 3?");
    assert_eq!(ranked.shortfall(), 0);
}

#[test]
fn test_shortfall_returns_everything_scored() {
    let (questions, answers) = fixture(3);
    let scores = vec![scored(2, 0.3), scored(0, 0.2), scored(1, 0.1)];

    let ranked = rank_qa_pairs(&questions, &answers, &scores, 10);

    assert_eq!(ranked.pairs.len(), 3);
    assert_eq!(ranked.requested, 10);
    assert_eq!(ranked.shortfall(), 7);
    assert_eq!(ranked.pairs[0].answer, Answer::Sentence("answer 2.".into()));
}

#[test]
fn test_only_scored_indices_selected() {
    let (questions, mut answers) = fixture(3);
    answers[1] = Answer::MultipleChoice(vec![Choice::correct("x")]);
    let scores = vec![scored(0, 0.5), scored(2, 0.8)];

    let ranked = rank_qa_pairs(&questions, &answers, &scores, 10);

    assert_eq!(ranked.pairs.len(), 2);
    assert!(ranked.pairs.iter().all(|p| !p.answer.is_multiple_choice()));
}

#[test]
fn test_ties_keep_input_order() {
    let (questions, answers) = fixture(3);
    let scores = vec![scored(2, 0.5), scored(0, 0.5), scored(1, 0.5)];

    let ranked = rank_qa_pairs(&questions, &answers, &scores, 3);

    let order: Vec<_> = ranked.pairs.iter().map(|p| p.question.as_str()).collect();
    assert_eq!(order, vec!["question 2?", "question 0?", "question 1?"]);
}

#[test]
fn test_zero_requested_is_empty() {
    let (questions, answers) = fixture(2);
    let scores = vec![scored(0, 1.0), scored(1, 2.0)];

    let ranked = rank_qa_pairs(&questions, &answers, &scores, 0);

    assert!(ranked.pairs.is_empty());
    assert_eq!(ranked.shortfall(), 0);
}

#[test]
fn test_all_pairs_keep_generation_order() {
    let (questions, answers) = fixture(3);

    let pairs = all_qa_pairs(questions, answers);

    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0], QaPair::new("question 0?", Answer::Sentence("answer 0.".into())));
    assert_eq!(pairs[2].question, "question 2?");
}
