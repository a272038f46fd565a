//! Game logic: question generation and the quiz session state machine.

mod generator;
mod session;

use thiserror::Error;

pub use generator::{generate, AnswerSet, Question, Round, ANSWER_SLOTS, MIN_DIFFICULTY};
pub use session::{Phase, Session, SessionConfig, Summary};

/// Contract violations raised by the game core.
///
/// None of these occur through normal key-driven play; they exist so that
/// a misbehaving host fails loudly instead of corrupting session state.
/// Every failed call leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Difficulty or round count outside the accepted bounds.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// An operation was invoked in a phase that forbids it.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// An answer index outside the four answer slots.
    #[error("answer index {0} is outside the four answer slots")]
    IndexOutOfRange(usize),
}
