//! Question generation.
//!
//! A question is two factors drawn uniformly from `1..=difficulty`; the
//! answer set holds the correct product plus three distractor products,
//! shuffled so the correct slot is unpredictable.

use rand::seq::SliceRandom;
use rand::Rng;

use super::GameError;

/// Number of candidate answers shown per question.
pub const ANSWER_SLOTS: usize = 4;

/// Smallest difficulty the generator accepts. At difficulty 1 the only
/// reachable product is 1 and distractor sampling cannot terminate.
pub const MIN_DIFFICULTY: u32 = 2;

/// Difficulty from which the factor range yields at least four distinct
/// products, so the answer set can be fully deduplicated. Difficulty 2
/// reaches only {1, 2, 4}.
const MIN_DISTINCT_DIFFICULTY: u32 = 3;

/// A multiplication problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub factor_a: u32,
    pub factor_b: u32,
}

impl Question {
    pub fn correct_answer(&self) -> u32 {
        self.factor_a * self.factor_b
    }
}

/// The four shuffled candidate answers for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    choices: [u32; ANSWER_SLOTS],
    correct_index: usize,
}

impl AnswerSet {
    pub fn choices(&self) -> &[u32; ANSWER_SLOTS] {
        &self.choices
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        self.choices.get(index).copied()
    }

    /// Position of the correct answer after shuffling.
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }
}

/// One round's worth of generated data.
#[derive(Debug, Clone)]
pub struct Round {
    pub question: Question,
    pub answers: AnswerSet,
}

/// Generates a question and its shuffled answer set.
///
/// Distractors are rejection-sampled: a candidate equal to the correct
/// answer is always redrawn, and from difficulty 3 upward candidates
/// colliding with an already-placed distractor are redrawn as well.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, difficulty: u32) -> Result<Round, GameError> {
    if difficulty < MIN_DIFFICULTY {
        return Err(GameError::InvalidConfig(format!(
            "difficulty must be at least {MIN_DIFFICULTY}, got {difficulty}"
        )));
    }

    let question = Question {
        factor_a: rng.random_range(1..=difficulty),
        factor_b: rng.random_range(1..=difficulty),
    };
    let correct = question.correct_answer();
    let dedup = difficulty >= MIN_DISTINCT_DIFFICULTY;

    let mut choices = [correct; ANSWER_SLOTS];
    for slot in 1..ANSWER_SLOTS {
        choices[slot] = loop {
            let candidate = rng.random_range(1..=difficulty) * rng.random_range(1..=difficulty);
            if candidate == correct {
                continue;
            }
            if dedup && choices[1..slot].contains(&candidate) {
                continue;
            }
            break candidate;
        };
    }

    choices.shuffle(rng);
    let correct_index = choices
        .iter()
        .position(|&c| c == correct)
        .unwrap_or_default();

    Ok(Round {
        question,
        answers: AnswerSet {
            choices,
            correct_index,
        },
    })
}
