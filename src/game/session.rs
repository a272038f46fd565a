//! Quiz session state machine.
//!
//! A session runs a configured number of rounds, one question each.
//! Transitions: `submit_answer` resolves the current round, `advance`
//! moves to the next round or to completion, `reset` restarts a
//! completed session with the same config. The host decides *when* to
//! advance (immediately, after a feedback delay, or on a key press);
//! the session only exposes the synchronous transition.

use rand::Rng;

use super::generator::{self, AnswerSet, Question, Round, ANSWER_SLOTS, MIN_DIFFICULTY};
use super::GameError;

/// Validated session parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Inclusive upper bound on question factors, at least 2.
    pub difficulty: u32,
    /// Number of rounds per session, at least 1.
    pub total_rounds: u32,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.difficulty < MIN_DIFFICULTY {
            return Err(GameError::InvalidConfig(format!(
                "difficulty must be at least {MIN_DIFFICULTY}, got {}",
                self.difficulty
            )));
        }
        if self.total_rounds == 0 {
            return Err(GameError::InvalidConfig(
                "total rounds must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Externally observable phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A question is on screen, waiting for an answer.
    RoundInProgress,
    /// The answer was scored; waiting for the host to advance.
    RoundResolved { correct: bool },
    /// All rounds played. Terminal until `reset`.
    SessionComplete,
}

/// Final score report for a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub score: u32,
    pub total_rounds: u32,
}

impl Summary {
    pub fn percentage(&self) -> f64 {
        // total_rounds is validated positive at construction
        f64::from(self.score) / f64::from(self.total_rounds) * 100.0
    }
}

/// One play-through of `total_rounds` multiplication questions.
///
/// Invariant: `score <= rounds_played <= total_rounds` at all times.
/// Every failed operation leaves the session unchanged.
pub struct Session<R: Rng> {
    config: SessionConfig,
    rng: R,
    phase: Phase,
    round: Round,
    score: u32,
    rounds_played: u32,
}

impl<R: Rng> Session<R> {
    /// Starts a session: validates the config, generates the first
    /// question, and enters `RoundInProgress`.
    pub fn new(config: SessionConfig, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let round = generator::generate(&mut rng, config.difficulty)?;
        Ok(Self {
            config,
            rng,
            phase: Phase::RoundInProgress,
            round,
            score: 0,
            rounds_played: 0,
        })
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn question(&self) -> &Question {
        &self.round.question
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.round.answers
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn total_rounds(&self) -> u32 {
        self.config.total_rounds
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::SessionComplete
    }

    /// Correctness of the last submission, while the round is resolved.
    pub fn last_answer_correct(&self) -> Option<bool> {
        match self.phase {
            Phase::RoundResolved { correct } => Some(correct),
            _ => None,
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            score: self.score,
            total_rounds: self.config.total_rounds,
        }
    }

    /// Scores the answer in the given slot and resolves the round.
    ///
    /// Returns whether the submission was correct.
    pub fn submit_answer(&mut self, index: usize) -> Result<bool, GameError> {
        if self.phase != Phase::RoundInProgress {
            return Err(GameError::InvalidState(
                "submit_answer requires a round in progress",
            ));
        }
        if index >= ANSWER_SLOTS {
            return Err(GameError::IndexOutOfRange(index));
        }
        let chosen = self
            .round
            .answers
            .get(index)
            .ok_or(GameError::IndexOutOfRange(index))?;

        let correct = chosen == self.round.question.correct_answer();
        if correct {
            self.score += 1;
        }
        self.rounds_played += 1;
        self.phase = Phase::RoundResolved { correct };
        Ok(correct)
    }

    /// Leaves `RoundResolved`: generates the next question, or enters
    /// `SessionComplete` once all rounds are played.
    pub fn advance(&mut self) -> Result<(), GameError> {
        if !matches!(self.phase, Phase::RoundResolved { .. }) {
            return Err(GameError::InvalidState(
                "advance requires a resolved round",
            ));
        }
        if self.rounds_played == self.config.total_rounds {
            self.phase = Phase::SessionComplete;
        } else {
            self.round = generator::generate(&mut self.rng, self.config.difficulty)?;
            self.phase = Phase::RoundInProgress;
        }
        Ok(())
    }

    /// Restarts a completed session with the same config.
    pub fn reset(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::SessionComplete {
            return Err(GameError::InvalidState(
                "reset requires a completed session",
            ));
        }
        self.round = generator::generate(&mut self.rng, self.config.difficulty)?;
        self.score = 0;
        self.rounds_played = 0;
        self.phase = Phase::RoundInProgress;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn session(difficulty: u32, total_rounds: u32, seed: u64) -> Session<ChaCha8Rng> {
        Session::new(
            SessionConfig {
                difficulty,
                total_rounds,
            },
            ChaCha8Rng::seed_from_u64(seed),
        )
        .unwrap()
    }

    fn wrong_index(s: &Session<ChaCha8Rng>) -> usize {
        // difficulty >= 3 guarantees all four answers distinct, so any
        // slot other than correct_index holds a wrong value.
        (s.answers().correct_index() + 1) % ANSWER_SLOTS
    }

    #[test]
    fn rejects_invalid_config() {
        let rng = ChaCha8Rng::seed_from_u64(0);
        let err = Session::new(
            SessionConfig {
                difficulty: 1,
                total_rounds: 5,
            },
            rng.clone(),
        )
        .err()
        .unwrap();
        assert!(matches!(err, GameError::InvalidConfig(_)));

        let err = Session::new(
            SessionConfig {
                difficulty: 5,
                total_rounds: 0,
            },
            rng,
        )
        .err()
        .unwrap();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn starts_with_a_round_in_progress() {
        let s = session(12, 10, 1);
        assert_eq!(s.phase(), Phase::RoundInProgress);
        assert_eq!(s.score(), 0);
        assert_eq!(s.rounds_played(), 0);
        assert_eq!(s.last_answer_correct(), None);
    }

    #[test]
    fn single_round_correct_answer_completes_with_full_score() {
        let mut s = session(3, 1, 2);
        let idx = s.answers().correct_index();

        assert_eq!(s.submit_answer(idx), Ok(true));
        assert_eq!(s.score(), 1);
        assert_eq!(s.rounds_played(), 1);
        assert_eq!(s.phase(), Phase::RoundResolved { correct: true });
        assert_eq!(s.last_answer_correct(), Some(true));

        s.advance().unwrap();
        assert!(s.is_complete());
        assert_eq!(
            s.summary(),
            Summary {
                score: 1,
                total_rounds: 1
            }
        );
    }

    #[test]
    fn wrong_then_correct_reports_one_of_two() {
        let mut s = session(5, 2, 3);

        assert_eq!(s.submit_answer(wrong_index(&s)), Ok(false));
        assert_eq!(s.score(), 0);
        assert_eq!(s.phase(), Phase::RoundResolved { correct: false });
        s.advance().unwrap();
        assert_eq!(s.phase(), Phase::RoundInProgress);

        assert_eq!(s.submit_answer(s.answers().correct_index()), Ok(true));
        s.advance().unwrap();

        let summary = s.summary();
        assert_eq!(summary.score, 1);
        assert_eq!(summary.total_rounds, 2);
        assert!(s.is_complete());
    }

    #[test]
    fn out_of_range_index_leaves_state_unchanged() {
        let mut s = session(5, 3, 4);
        let question = *s.question();
        let answers = s.answers().clone();

        assert_eq!(s.submit_answer(ANSWER_SLOTS + 1), Err(GameError::IndexOutOfRange(5)));
        assert_eq!(s.phase(), Phase::RoundInProgress);
        assert_eq!(s.score(), 0);
        assert_eq!(s.rounds_played(), 0);
        assert_eq!(*s.question(), question);
        assert_eq!(*s.answers(), answers);
    }

    #[test]
    fn submit_outside_round_in_progress_fails() {
        let mut s = session(4, 1, 5);
        s.submit_answer(0).unwrap();

        assert!(matches!(
            s.submit_answer(0),
            Err(GameError::InvalidState(_))
        ));

        s.advance().unwrap();
        assert!(s.is_complete());
        assert!(matches!(
            s.submit_answer(0),
            Err(GameError::InvalidState(_))
        ));
        assert_eq!(s.rounds_played(), 1);
    }

    #[test]
    fn advance_requires_a_resolved_round() {
        let mut s = session(4, 2, 6);
        assert!(matches!(s.advance(), Err(GameError::InvalidState(_))));

        s.submit_answer(0).unwrap();
        s.advance().unwrap();
        assert!(matches!(s.advance(), Err(GameError::InvalidState(_))));
    }

    #[test]
    fn reset_restarts_a_completed_session() {
        let mut s = session(6, 1, 7);
        assert!(matches!(s.reset(), Err(GameError::InvalidState(_))));

        s.submit_answer(s.answers().correct_index()).unwrap();
        s.advance().unwrap();
        assert!(s.is_complete());

        s.reset().unwrap();
        assert_eq!(s.phase(), Phase::RoundInProgress);
        assert_eq!(s.score(), 0);
        assert_eq!(s.rounds_played(), 0);
        assert_eq!(s.total_rounds(), 1);
    }

    #[test]
    fn score_never_exceeds_rounds_played() {
        let mut s = session(12, 20, 8);
        for turn in 0..20 {
            let idx = if turn % 3 == 0 {
                s.answers().correct_index()
            } else {
                wrong_index(&s)
            };
            s.submit_answer(idx).unwrap();
            assert!(s.score() <= s.rounds_played());
            assert!(s.rounds_played() <= s.total_rounds());
            s.advance().unwrap();
        }
        assert!(s.is_complete());
        assert_eq!(s.rounds_played(), 20);
        assert_eq!(s.score(), 7);
    }
}
