//! # math-quiz
//!
//! A terminal multiplication quiz game.
//!
//! Pick a difficulty (the bound on question factors) and a round count
//! on the settings screen, then answer multiple-choice multiplication
//! questions against a running score.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use math_quiz::{MathQuiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     MathQuiz::new().run()
//! }
//! ```

mod app;
pub mod game;
pub mod terminal;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::{
    App, Screen, DEFAULT_DIFFICULTY, DEFAULT_ROUNDS, MAX_DIFFICULTY, ROUND_OPTIONS,
};
pub use game::{GameError, Phase, Session, SessionConfig};

/// Poll timeout when no auto-advance is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A game-core contract violation. Indicates a bug in the host.
    #[error("game error: {0}")]
    Game(#[from] GameError),

    /// IO error while driving the terminal.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz game instance that can be run in the terminal.
pub struct MathQuiz {
    app: App,
}

impl MathQuiz {
    /// Create a quiz with default settings (difficulty 12, 10 rounds).
    pub fn new() -> Self {
        Self { app: App::new() }
    }

    /// Create a quiz with the settings screen prefilled.
    pub fn with_settings(difficulty: u32, rounds: u32) -> Self {
        Self {
            app: App::with_settings(difficulty, rounds),
        }
    }

    /// Run the game in the terminal.
    ///
    /// This takes over the terminal, displays the game UI, and returns
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

impl Default for MathQuiz {
    fn default() -> Self {
        Self::new()
    }
}

fn run_event_loop(terminal: &mut terminal::GameTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // Wake up in time for a pending auto-advance instead of
        // blocking on the next key press.
        let timeout = app
            .time_until_advance(Instant::now())
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_input(app, key.code)? {
                    break;
                }
            }
        }

        app.tick()?;
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> Result<bool, QuizError> {
    match app.screen {
        Screen::Settings => handle_settings_input(app, key),
        Screen::Game => handle_game_input(app, key),
        Screen::Summary => handle_summary_input(app, key),
    }
}

fn handle_settings_input(app: &mut App, key: KeyCode) -> Result<bool, QuizError> {
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.decrease_difficulty(),
        KeyCode::Right | KeyCode::Char('l') => app.increase_difficulty(),
        KeyCode::Down | KeyCode::Char('j') => app.next_round_option(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_round_option(),
        KeyCode::Enter => app.start_game()?,
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn handle_game_input(app: &mut App, key: KeyCode) -> Result<bool, QuizError> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_answer(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_answer(),
        KeyCode::Char(c @ '1'..='4') => {
            app.select_answer(c as usize - '1' as usize);
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer()?,
        KeyCode::Esc => app.end_game(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn handle_summary_input(app: &mut App, key: KeyCode) -> Result<bool, QuizError> {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => app.play_again()?,
        KeyCode::Char('s') | KeyCode::Char('S') => app.end_game(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}
