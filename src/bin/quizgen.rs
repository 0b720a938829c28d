//! Command-line question generation over a text file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use quizgen::config::Config;
use quizgen::pipeline::{GenerateOptions, QuestionGenerator};
use quizgen::prompt::AnswerStyle;
use quizgen::qa::render_qa;

#[derive(Parser, Debug)]
#[command(
    name = "quizgen",
    version,
    about = "Generate question and answer pairs from a text file."
)]
struct Cli {
    /// Text file to generate questions from
    file: PathBuf,

    /// Number of ranked questions (default 10; ignored with --no-evaluator)
    #[arg(short, long)]
    num_questions: Option<usize>,

    /// Answer style: all, sentences or multiple_choice
    #[arg(short, long, default_value = "all")]
    answer_style: String,

    /// Return every generated pair in generation order without ranking
    #[arg(long)]
    no_evaluator: bool,

    /// Rank multiple-choice pairs by their correct choice
    #[arg(long)]
    score_multiple_choice: bool,

    /// Seed for distractor sampling
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let answer_style: AnswerStyle = cli.answer_style.parse()?;
    let text = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    let mut config = Config::from_env()?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;

    let generator = QuestionGenerator::from_config(&config)?;

    let mut options = GenerateOptions::new()
        .with_answer_style(answer_style)
        .with_evaluator(!cli.no_evaluator)
        .with_score_multiple_choice(cli.score_multiple_choice);
    if let Some(n) = cli.num_questions {
        options = options.with_num_questions(n);
    }

    let pairs = generator.generate(&text, &options)?;
    print!("{}", render_qa(&pairs));

    Ok(())
}
