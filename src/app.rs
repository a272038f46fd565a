//! Host state: the active screen, the settings form, and the owned
//! quiz session together with the auto-advance timer.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::game::{GameError, Phase, Session, SessionConfig, ANSWER_SLOTS, MIN_DIFFICULTY};

/// Largest factor bound selectable on the settings screen.
pub const MAX_DIFFICULTY: u32 = 12;

/// Round counts offered by the settings picker.
pub const ROUND_OPTIONS: [u32; 4] = [5, 10, 15, 20];

pub const DEFAULT_DIFFICULTY: u32 = 12;
pub const DEFAULT_ROUNDS: u32 = 10;

/// How long right/wrong feedback stays on screen before the next round.
const ADVANCE_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Settings,
    Game,
    Summary,
}

pub struct App {
    pub screen: Screen,
    difficulty: u32,
    rounds_index: usize,
    selected_slot: usize,
    session: Option<Session<ChaCha8Rng>>,
    advance_at: Option<Instant>,
}

impl App {
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_DIFFICULTY, DEFAULT_ROUNDS)
    }

    /// Creates the app with the settings form prefilled. Difficulty is
    /// clamped into the selectable range; an unknown round count falls
    /// back to the default option.
    pub fn with_settings(difficulty: u32, rounds: u32) -> Self {
        let rounds_index = ROUND_OPTIONS
            .iter()
            .position(|&r| r == rounds)
            .or_else(|| ROUND_OPTIONS.iter().position(|&r| r == DEFAULT_ROUNDS))
            .unwrap_or_default();

        Self {
            screen: Screen::Settings,
            difficulty: difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY),
            rounds_index,
            selected_slot: 0,
            session: None,
            advance_at: None,
        }
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn rounds(&self) -> u32 {
        ROUND_OPTIONS[self.rounds_index]
    }

    pub fn session(&self) -> Option<&Session<ChaCha8Rng>> {
        self.session.as_ref()
    }

    pub fn selected_slot(&self) -> usize {
        self.selected_slot
    }

    pub fn increase_difficulty(&mut self) {
        self.difficulty = (self.difficulty + 1).min(MAX_DIFFICULTY);
    }

    pub fn decrease_difficulty(&mut self) {
        self.difficulty = (self.difficulty - 1).max(MIN_DIFFICULTY);
    }

    pub fn next_round_option(&mut self) {
        self.rounds_index = (self.rounds_index + 1) % ROUND_OPTIONS.len();
    }

    pub fn previous_round_option(&mut self) {
        self.rounds_index = (self.rounds_index + ROUND_OPTIONS.len() - 1) % ROUND_OPTIONS.len();
    }

    /// Starts a session from the current settings and shows the game.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        let config = SessionConfig {
            difficulty: self.difficulty,
            total_rounds: self.rounds(),
        };
        self.session = Some(Session::new(config, ChaCha8Rng::from_os_rng())?);
        self.selected_slot = 0;
        self.advance_at = None;
        self.screen = Screen::Game;
        Ok(())
    }

    /// Tears the session down and returns to settings. Cancels any
    /// pending auto-advance so the discarded session is never touched.
    pub fn end_game(&mut self) {
        self.advance_at = None;
        self.session = None;
        self.selected_slot = 0;
        self.screen = Screen::Settings;
    }

    /// Replays the completed session with the same config.
    pub fn play_again(&mut self) -> Result<(), GameError> {
        let Some(session) = &mut self.session else {
            return Ok(());
        };
        session.reset()?;
        self.selected_slot = 0;
        self.advance_at = None;
        self.screen = Screen::Game;
        Ok(())
    }

    fn answering(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.phase() == Phase::RoundInProgress)
    }

    pub fn select_next_answer(&mut self) {
        if self.answering() {
            self.selected_slot = (self.selected_slot + 1) % ANSWER_SLOTS;
        }
    }

    pub fn select_previous_answer(&mut self) {
        if self.answering() {
            self.selected_slot = (self.selected_slot + ANSWER_SLOTS - 1) % ANSWER_SLOTS;
        }
    }

    pub fn select_answer(&mut self, slot: usize) {
        if self.answering() && slot < ANSWER_SLOTS {
            self.selected_slot = slot;
        }
    }

    /// Submits the highlighted answer and schedules the auto-advance.
    ///
    /// A press while feedback is showing is ignored rather than treated
    /// as misuse; the next round is not on screen yet.
    pub fn submit_answer(&mut self) -> Result<(), GameError> {
        if !self.answering() {
            return Ok(());
        }
        let Some(session) = &mut self.session else {
            return Ok(());
        };
        session.submit_answer(self.selected_slot)?;
        self.advance_at = Some(Instant::now() + ADVANCE_DELAY);
        Ok(())
    }

    /// Time left until the scheduled advance, if one is pending.
    pub fn time_until_advance(&self, now: Instant) -> Option<Duration> {
        self.advance_at.map(|at| at.saturating_duration_since(now))
    }

    pub fn tick(&mut self) -> Result<(), GameError> {
        self.tick_at(Instant::now())
    }

    /// Fires the scheduled advance once its deadline has passed.
    pub fn tick_at(&mut self, now: Instant) -> Result<(), GameError> {
        let due = self.advance_at.is_some_and(|at| now >= at);
        if !due {
            return Ok(());
        }
        self.advance_at = None;

        let Some(session) = &mut self.session else {
            return Ok(());
        };
        session.advance()?;
        if session.is_complete() {
            self.screen = Screen::Summary;
        } else {
            self.selected_slot = 0;
        }
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_stepper_clamps_difficulty() {
        let mut app = App::with_settings(2, 10);
        app.decrease_difficulty();
        assert_eq!(app.difficulty(), 2);

        let mut app = App::with_settings(12, 10);
        app.increase_difficulty();
        assert_eq!(app.difficulty(), 12);

        let app = App::with_settings(40, 10);
        assert_eq!(app.difficulty(), 12);
    }

    #[test]
    fn round_picker_cycles_through_options() {
        let mut app = App::with_settings(12, 5);
        assert_eq!(app.rounds(), 5);
        app.previous_round_option();
        assert_eq!(app.rounds(), 20);
        for _ in 0..4 {
            app.next_round_option();
        }
        assert_eq!(app.rounds(), 20);
    }

    #[test]
    fn unknown_round_preset_falls_back_to_default() {
        let app = App::with_settings(12, 7);
        assert_eq!(app.rounds(), DEFAULT_ROUNDS);
    }

    #[test]
    fn start_game_opens_a_fresh_session() {
        let mut app = App::with_settings(6, 5);
        app.start_game().unwrap();

        assert_eq!(app.screen, Screen::Game);
        let session = app.session().unwrap();
        assert_eq!(session.phase(), Phase::RoundInProgress);
        assert_eq!(session.total_rounds(), 5);
        assert_eq!(app.time_until_advance(Instant::now()), None);
    }

    #[test]
    fn submit_schedules_advance_and_tick_fires_it() {
        let mut app = App::with_settings(6, 5);
        app.start_game().unwrap();

        app.submit_answer().unwrap();
        let now = Instant::now();
        assert!(app.time_until_advance(now).is_some());
        assert_eq!(app.session().unwrap().rounds_played(), 1);

        // Before the deadline nothing moves.
        app.tick_at(now).unwrap();
        assert!(matches!(
            app.session().unwrap().phase(),
            Phase::RoundResolved { .. }
        ));

        app.tick_at(now + Duration::from_secs(2)).unwrap();
        assert_eq!(app.session().unwrap().phase(), Phase::RoundInProgress);
        assert_eq!(app.time_until_advance(now), None);
    }

    #[test]
    fn final_round_advances_to_summary() {
        let mut app = App::with_settings(6, 5);
        app.start_game().unwrap();

        for _ in 0..5 {
            app.submit_answer().unwrap();
            app.tick_at(Instant::now() + Duration::from_secs(2))
                .unwrap();
        }

        assert_eq!(app.screen, Screen::Summary);
        assert!(app.session().unwrap().is_complete());
    }

    #[test]
    fn answer_presses_during_feedback_are_ignored() {
        let mut app = App::with_settings(6, 5);
        app.start_game().unwrap();
        app.select_answer(2);
        assert_eq!(app.selected_slot(), 2);

        app.submit_answer().unwrap();
        let played = app.session().unwrap().rounds_played();

        app.select_next_answer();
        app.submit_answer().unwrap();
        assert_eq!(app.selected_slot(), 2);
        assert_eq!(app.session().unwrap().rounds_played(), played);
    }

    #[test]
    fn end_game_cancels_the_pending_advance() {
        let mut app = App::with_settings(6, 5);
        app.start_game().unwrap();
        app.submit_answer().unwrap();

        app.end_game();
        assert_eq!(app.screen, Screen::Settings);
        assert!(app.session().is_none());
        assert_eq!(app.time_until_advance(Instant::now()), None);

        // A stale deadline must not fire into a torn-down session.
        app.tick_at(Instant::now() + Duration::from_secs(5)).unwrap();
        assert!(app.session().is_none());
    }

    #[test]
    fn play_again_restarts_with_the_same_config() {
        let mut app = App::with_settings(6, 5);
        app.start_game().unwrap();
        for _ in 0..5 {
            app.submit_answer().unwrap();
            app.tick_at(Instant::now() + Duration::from_secs(2))
                .unwrap();
        }
        assert_eq!(app.screen, Screen::Summary);

        app.play_again().unwrap();
        assert_eq!(app.screen, Screen::Game);
        let session = app.session().unwrap();
        assert_eq!(session.rounds_played(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.total_rounds(), 5);
    }
}
