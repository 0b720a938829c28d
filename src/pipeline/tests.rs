use super::*;
use crate::models::{MockEntityRecognizer, MockPairScorer, MockQuestionModel};
use crate::qa::EntitySpan;

type MockGenerator = QuestionGenerator<MockQuestionModel, MockPairScorer, MockEntityRecognizer>;

const TEXT: &str = "Ada Lovelace wrote the first program in 1843. \
                    Charles Babbage designed the Analytical Engine.";

fn known_entities() -> Vec<EntitySpan> {
    vec![
        EntitySpan::new("Ada Lovelace", "PERSON"),
        EntitySpan::new("1843", "DATE"),
        EntitySpan::new("Charles Babbage", "PERSON"),
    ]
}

fn generator_with(scorer: MockPairScorer) -> MockGenerator {
    QuestionGenerator::new(
        MockQuestionModel::new(),
        scorer,
        MockEntityRecognizer::new(known_entities()),
    )
    .with_seed(7)
}

fn generator() -> MockGenerator {
    generator_with(MockPairScorer::new())
}

mod input_tests {
    use super::*;

    #[test]
    fn test_invalid_style_fails_before_model_calls() {
        let generator = generator();

        let err = generator.generate_qg_inputs_str(TEXT, "bogus").unwrap_err();

        assert!(matches!(err, PipelineError::Prompt(_)));
        assert!(err.is_invalid_input());
        assert_eq!(generator.question_model().calls(), 0);
        assert_eq!(generator.recognizer().calls(), 0);
    }

    #[test]
    fn test_sentence_style_skips_recognizer() {
        let generator = generator();

        let inputs = generator
            .generate_qg_inputs(TEXT, AnswerStyle::Sentences)
            .unwrap();

        assert_eq!(inputs.len(), 2);
        assert!(inputs.iter().all(|i| !i.answer.is_multiple_choice()));
        assert_eq!(generator.recognizer().calls(), 0);
    }

    #[test]
    fn test_entity_style_builds_one_input_per_entity() {
        let generator = generator();

        let inputs = generator
            .generate_qg_inputs(TEXT, AnswerStyle::MultipleChoice)
            .unwrap();

        assert_eq!(inputs.len(), 3);
        assert_eq!(generator.recognizer().calls(), 1);
        for input in &inputs {
            let Answer::MultipleChoice(choices) = &input.answer else {
                panic!("expected multiple choice");
            };
            assert!(choices.len() <= 4);
            assert_eq!(choices.iter().filter(|c| c.correct).count(), 1);
        }
        assert!(
            inputs[0]
                .prompt
                .starts_with("<answer> Ada Lovelace <context> Ada Lovelace wrote")
        );
    }

    #[test]
    fn test_all_style_puts_sentences_first() {
        let generator = generator();

        let inputs = generator.generate_qg_inputs(TEXT, AnswerStyle::All).unwrap();

        assert_eq!(inputs.len(), 5);
        assert!(inputs[..2].iter().all(|i| !i.answer.is_multiple_choice()));
        assert!(inputs[2..].iter().all(|i| i.answer.is_multiple_choice()));
    }

    #[test]
    fn test_questions_match_inputs_in_order() {
        let generator = generator();
        let inputs = generator.generate_qg_inputs(TEXT, AnswerStyle::All).unwrap();

        let questions = generator.generate_questions_from_inputs(&inputs).unwrap();

        assert_eq!(questions.len(), inputs.len());
        assert_eq!(generator.question_model().calls(), inputs.len());
        assert!(questions[0].starts_with("Q0: Ada Lovelace wrote"));
        assert_eq!(questions[2], "Q2: Ada Lovelace?");
    }

    #[test]
    fn test_generation_failure_propagates() {
        let generator = QuestionGenerator::new(
            MockQuestionModel::failing_on("Babbage"),
            MockPairScorer::new(),
            MockEntityRecognizer::new(vec![]),
        );

        let err = generator
            .generate(TEXT, &GenerateOptions::new())
            .unwrap_err();

        assert!(matches!(err, PipelineError::Generation(_)));
    }
}

mod generate_tests {
    use super::*;

    #[test]
    fn test_two_short_sentences_without_evaluator() {
        let generator = generator();
        let options = GenerateOptions::new()
            .with_evaluator(false)
            .with_answer_style(AnswerStyle::Sentences);

        let pairs = generator
            .generate("The sky is blue. Grass is green.", &options)
            .unwrap();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].answer, Answer::Sentence("The sky is blue.".into()));
        assert_eq!(pairs[1].answer, Answer::Sentence("Grass is green.".into()));
        assert_eq!(generator.scorer().calls(), 0);
    }

    #[test]
    fn test_without_evaluator_keeps_every_pair_in_order() {
        let generator = generator();
        let options = GenerateOptions::new()
            .with_evaluator(false)
            .with_num_questions(1);

        let pairs = generator.generate(TEXT, &options).unwrap();

        assert_eq!(pairs.len(), 5);
        assert!(pairs[..2].iter().all(|p| !p.answer.is_multiple_choice()));
        assert!(pairs[2..].iter().all(|p| p.answer.is_multiple_choice()));
        assert!(pairs[0].question.starts_with("Q0:"));
        assert!(pairs[4].question.starts_with("Q4:"));
    }

    #[test]
    fn test_top_n_by_score() {
        let scorer = MockPairScorer::new()
            .with_score("Ada Lovelace wrote the first program in 1843.", 0.2)
            .with_score("Charles Babbage designed the Analytical Engine.", 0.9);
        let generator = generator_with(scorer);
        let options = GenerateOptions::new().with_num_questions(1);

        let pairs = generator.generate(TEXT, &options).unwrap();

        assert_eq!(pairs.len(), 1);
        assert_eq!(
            pairs[0].answer,
            Answer::Sentence("Charles Babbage designed the Analytical Engine.".into())
        );
    }

    #[test]
    fn test_more_requested_than_available() {
        let generator = generator();
        let options = GenerateOptions::new()
            .with_num_questions(50)
            .with_answer_style(AnswerStyle::Sentences);

        let pairs = generator.generate(TEXT, &options).unwrap();

        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_default_ranks_ten() {
        let text = (0..15)
            .map(|i| format!("Sentence number {i} is here."))
            .collect::<Vec<_>>()
            .join(" ");
        let generator = generator();

        let pairs = generator.generate(&text, &GenerateOptions::new()).unwrap();

        assert_eq!(pairs.len(), 10);
    }

    #[test]
    fn test_multiple_choice_excluded_under_evaluation() {
        let generator = generator();

        let pairs = generator.generate(TEXT, &GenerateOptions::new()).unwrap();

        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|p| !p.answer.is_multiple_choice()));
        assert_eq!(generator.scorer().calls(), 2);
    }

    #[test]
    fn test_multiple_choice_ranked_when_opted_in() {
        let scorer = MockPairScorer::new()
            .with_default_score(0.1)
            .with_score("1843", 0.8);
        let generator = generator_with(scorer);
        let options = GenerateOptions::new()
            .with_score_multiple_choice(true)
            .with_num_questions(1);

        let pairs = generator.generate(TEXT, &options).unwrap();

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].answer.correct_text(), Some("1843"));
        assert_eq!(generator.scorer().calls(), 5);
    }

    #[test]
    fn test_empty_text_yields_no_pairs() {
        let generator = generator();

        let pairs = generator.generate("", &GenerateOptions::new()).unwrap();

        assert!(pairs.is_empty());
        assert_eq!(generator.question_model().calls(), 0);
    }

    #[test]
    fn test_same_seed_same_output() {
        let options = GenerateOptions::new().with_evaluator(false);

        let a = generator().generate(TEXT, &options).unwrap();
        let b = generator().generate(TEXT, &options).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_from_config_stub_mode() {
        let generator = QuestionGenerator::from_config(&Config {
            device: crate::models::DevicePreference::Cpu,
            seed: Some(1),
            ..Default::default()
        })
        .unwrap();

        assert!(!QuestionModel::is_model_loaded(generator.question_model()));
        let pairs = generator
            .generate("The sky is blue. Grass is green.", &GenerateOptions::new())
            .unwrap();
        assert_eq!(pairs.len(), 2);
    }

    #[cfg(not(feature = "cuda"))]
    #[test]
    fn test_from_config_unavailable_device_is_device_error() {
        let result = QuestionGenerator::from_config(&Config {
            device: crate::models::DevicePreference::Cuda,
            ..Default::default()
        });

        let err = result.err().unwrap();
        assert!(matches!(
            err,
            PipelineError::Device(crate::models::ModelError::DeviceUnavailable { .. })
        ));
        assert!(err.to_string().contains("cuda"));
    }
}
