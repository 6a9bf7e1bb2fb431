//! Session state machine
//!
//! `NotStarted -> InProgress -> {Won, Lost}`. [`SessionManager`] owns the
//! current [`GameSession`] and the [`Stats`], and writes both to its
//! [`GameStore`] after every transition. Store failures are logged and
//! swallowed; the in-memory state stays authoritative.

use super::error::{GameError, StateError, ValidationError};
use super::share::ShareDescriptor;
use super::source::AnswerSource;
use super::stats::Stats;
use super::store::GameStore;
use crate::core::{AttemptLimit, Code, Difficulty, Feedback, Mode, evaluate, filter_feedback};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// One submitted guess and the feedback shown for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    guess: String,
    feedback: Feedback,
}

impl Attempt {
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single play-through, persisted as the `currentGame` record
///
/// The answer is serialized with the rest of the session but only exposed
/// through [`GameSession::revealed_answer`] once the game is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    mode: Mode,
    difficulty: Difficulty,
    answer: String,
    max_attempts: AttemptLimit,
    attempts: Vec<Attempt>,
    #[serde(default)]
    is_won: Option<bool>,
    started_at: u64,
    #[serde(default)]
    completed_at: Option<u64>,
    #[serde(default)]
    custom: bool,
}

impl GameSession {
    fn new(
        mode: Mode,
        difficulty: Difficulty,
        answer: String,
        max_attempts: AttemptLimit,
        custom: bool,
    ) -> Self {
        Self {
            mode,
            difficulty,
            answer,
            max_attempts,
            attempts: Vec::new(),
            is_won: None,
            started_at: now_millis(),
            completed_at: None,
            custom,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn max_attempts(&self) -> AttemptLimit {
        self.max_attempts
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// `None` while in progress
    #[must_use]
    pub const fn is_won(&self) -> Option<bool> {
        self.is_won
    }

    /// Whether the session came from a share link
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        self.custom
    }

    /// Milliseconds since the Unix epoch
    #[must_use]
    pub const fn started_at(&self) -> u64 {
        self.started_at
    }

    #[must_use]
    pub const fn completed_at(&self) -> Option<u64> {
        self.completed_at
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        match self.is_won {
            Some(true) => SessionState::Won,
            Some(false) => SessionState::Lost,
            None => SessionState::InProgress,
        }
    }

    /// The answer, once there is nothing left to guess
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&str> {
        self.is_complete().then_some(self.answer.as_str())
    }

    /// `None` for unlimited budgets
    #[must_use]
    pub const fn attempts_remaining(&self) -> Option<usize> {
        self.max_attempts.remaining(self.attempts.len())
    }

    /// Wall-clock time between start and completion
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.completed_at
            .map(|completed| Duration::from_millis(completed.saturating_sub(self.started_at)))
    }

    fn matches(&self, descriptor: &ShareDescriptor) -> bool {
        self.mode == descriptor.mode
            && self.answer.eq_ignore_ascii_case(&descriptor.answer)
            && self.max_attempts == descriptor.max_attempts
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub attempt: Attempt,
    pub state: SessionState,
}

/// Owns the current session and the stats, and persists both
pub struct SessionManager<S, St> {
    source: S,
    store: St,
    show_misplaced: bool,
    session: Option<GameSession>,
    stats: Stats,
}

impl<S: AnswerSource, St: GameStore> SessionManager<S, St> {
    /// Create a manager, restoring any saved session and stats from `store`
    ///
    /// `show_misplaced` controls whether Insane summaries include a
    /// misplaced count.
    pub fn new(source: S, store: St, show_misplaced: bool) -> Self {
        let session = store.load_game().unwrap_or_else(|error| {
            tracing::warn!("Discarding unreadable saved game: {error}");
            None
        });
        let stats = store.load_stats().unwrap_or_else(|error| {
            tracing::warn!("Discarding unreadable stats: {error}");
            Stats::default()
        });
        if let Some(session) = &session {
            tracing::debug!(mode = %session.mode, state = ?session.state(), "Restored saved game");
        }

        Self {
            source,
            store,
            show_misplaced,
            session,
            stats,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session
            .as_ref()
            .map_or(SessionState::NotStarted, GameSession::state)
    }

    #[must_use]
    pub const fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    #[must_use]
    pub const fn store(&self) -> &St {
        &self.store
    }

    /// Start a random game
    ///
    /// While a game is in progress this is a no-op that returns the existing
    /// session; call [`SessionManager::reset_game`] or
    /// [`SessionManager::restart_game`] first. A finished game is replaced.
    pub fn start_game(&mut self, mode: Mode, difficulty: Difficulty) -> &GameSession {
        let session = match self.session.take() {
            Some(existing) if !existing.is_complete() => {
                tracing::debug!("start_game ignored: a game is already in progress");
                existing
            }
            _ => {
                let answer = self.source.generate_answer(mode);
                let fresh =
                    GameSession::new(mode, difficulty, answer, difficulty.attempt_limit(), false);
                tracing::info!(%mode, %difficulty, "Game started");
                Self::write_game(&mut self.store, Some(&fresh));
                fresh
            }
        };
        self.session.insert(session)
    }

    /// Start a game from a shared descriptor
    ///
    /// Custom games use Easy visibility. If the same custom game is already in
    /// progress it is resumed rather than restarted.
    ///
    /// # Errors
    /// Returns `GameError::InvalidDescriptor` if the answer does not fit the
    /// mode or the budget is zero. No session is created in that case.
    pub fn start_custom_game(
        &mut self,
        descriptor: ShareDescriptor,
    ) -> Result<&GameSession, GameError> {
        let descriptor = descriptor.validated()?;

        let session = match self.session.take() {
            Some(existing) if !existing.is_complete() && existing.matches(&descriptor) => {
                tracing::debug!("Resuming custom game already in progress");
                existing
            }
            _ => {
                let fresh = GameSession::new(
                    descriptor.mode,
                    Difficulty::Easy,
                    descriptor.answer,
                    descriptor.max_attempts,
                    true,
                );
                tracing::info!(mode = %descriptor.mode, max_attempts = %descriptor.max_attempts, "Custom game started");
                Self::write_game(&mut self.store, Some(&fresh));
                fresh
            }
        };
        let session: &GameSession = self.session.insert(session);
        Ok(session)
    }

    /// Submit a guess for the current game
    ///
    /// # Errors
    /// - `GameError::State` if no game is in progress
    /// - `GameError::Validation` if the guess does not fit the mode, or (word
    ///   mode) is not in the word list; nothing is recorded
    /// - `GameError::Corrupt` if the saved answer no longer fits its mode
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessResult, GameError> {
        let Some(session) = self.session.as_mut() else {
            return Err(StateError::NoActiveGame.into());
        };
        if session.is_complete() {
            return Err(StateError::GameOver.into());
        }

        let guess = Code::parse(session.mode, text).map_err(ValidationError::Shape)?;
        let answer = session.answer.to_ascii_lowercase();
        if session.mode == Mode::Lexical
            && guess.text() != answer
            && !self.source.is_valid_guess(guess.text())
        {
            return Err(ValidationError::NotInWordList(guess.into_string()).into());
        }

        let raw = evaluate(guess.text(), &answer)?;
        let feedback = filter_feedback(&raw, session.difficulty, self.show_misplaced);
        let won = guess.text() == answer;
        let attempt = Attempt {
            guess: guess.into_string(),
            feedback,
        };
        session.attempts.push(attempt.clone());

        let outcome = if won {
            Some(true)
        } else if session.max_attempts.is_exhausted(session.attempts.len()) {
            Some(false)
        } else {
            None
        };

        if let Some(won) = outcome {
            session.is_won = Some(won);
            session.completed_at = Some(now_millis());
            self.stats = self.stats.record_outcome(won);
            tracing::info!(
                won,
                attempts = session.attempts.len(),
                "Game finished"
            );
            Self::write_stats(&mut self.store, &self.stats);
        }

        let state = session.state();
        Self::write_game(&mut self.store, self.session.as_ref());

        Ok(GuessResult { attempt, state })
    }

    /// Replace the current game with a fresh one of the same kind
    ///
    /// Keeps mode, difficulty and budget; draws a new answer. Returns `None`
    /// (and does nothing) when no game exists.
    pub fn restart_game(&mut self) -> Option<&GameSession> {
        let previous = self.session.take()?;
        let answer = self.source.generate_answer(previous.mode);
        let fresh = GameSession::new(
            previous.mode,
            previous.difficulty,
            answer,
            previous.max_attempts,
            previous.custom,
        );
        tracing::info!(mode = %fresh.mode, difficulty = %fresh.difficulty, "Game restarted");
        Self::write_game(&mut self.store, Some(&fresh));
        let session: &GameSession = self.session.insert(fresh);
        Some(session)
    }

    /// Drop the current game; stats are untouched
    pub fn reset_game(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("Game reset");
        }
        Self::write_game(&mut self.store, None);
    }

    fn write_game(store: &mut St, game: Option<&GameSession>) {
        if let Err(error) = store.save_game(game) {
            tracing::warn!("Could not save game: {error}");
        }
    }

    fn write_stats(store: &mut St, stats: &Stats) {
        if let Err(error) = store.save_stats(stats) {
            tracing::warn!("Could not save stats: {error}");
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}
