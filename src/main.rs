use clap::Parser;
use math_quiz::{MathQuiz, DEFAULT_DIFFICULTY, DEFAULT_ROUNDS, ROUND_OPTIONS};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Difficulty preset for the settings screen (2-12)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(2..=12))]
    difficulty: Option<u32>,

    /// Round count preset (5, 10, 15 or 20)
    #[arg(short, long, value_parser = parse_rounds)]
    rounds: Option<u32>,
}

fn parse_rounds(value: &str) -> Result<u32, String> {
    let rounds: u32 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if ROUND_OPTIONS.contains(&rounds) {
        Ok(rounds)
    } else {
        Err(format!("round count must be one of {ROUND_OPTIONS:?}"))
    }
}

fn main() {
    let args = Args::parse();
    let quiz = MathQuiz::with_settings(
        args.difficulty.unwrap_or(DEFAULT_DIFFICULTY),
        args.rounds.unwrap_or(DEFAULT_ROUNDS),
    );

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
