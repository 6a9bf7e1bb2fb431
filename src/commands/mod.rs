//! Command implementations

pub mod share;
pub mod simple;

pub use share::{ShareLink, create_share_link};
pub use simple::run_simple;

use crate::core::{Difficulty, Mode};
use crate::game::share::parse_link;
use crate::game::{AnswerSource, GameError, GameStore, LinkError, SessionManager, SessionState};
use std::fmt;

/// How the player asked to begin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameOptions {
    pub mode: Option<Mode>,
    pub difficulty: Option<Difficulty>,
    /// Share link (full URL or query string)
    pub link: Option<String>,
}

/// Error for a game that could not be opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    Link(LinkError),
    Game(GameError),
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link(error) => write!(f, "{error} ({})", error.code()),
            Self::Game(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for OpenError {}

/// Put the manager into an in-progress game according to `options`
///
/// - a link always wins and starts (or resumes) that custom game
/// - an explicit mode or difficulty starts a new random game, replacing an
///   unfinished one
/// - otherwise an unfinished saved game is resumed, or a number game on
///   easy is started
///
/// # Errors
///
/// Returns `OpenError::Link` if the link is unusable.
pub fn open_game<S: AnswerSource, St: GameStore>(
    manager: &mut SessionManager<S, St>,
    options: &GameOptions,
) -> Result<(), OpenError> {
    if let Some(link) = &options.link {
        let descriptor = parse_link(link).map_err(OpenError::Link)?;
        manager
            .start_custom_game(descriptor)
            .map_err(OpenError::Game)?;
        return Ok(());
    }

    let explicit = options.mode.is_some() || options.difficulty.is_some();
    if explicit || manager.state() != SessionState::InProgress {
        let saved = manager.session();
        let mode = options
            .mode
            .or_else(|| saved.map(crate::game::GameSession::mode))
            .unwrap_or(Mode::Numeric);
        let difficulty = options
            .difficulty
            .or_else(|| saved.map(crate::game::GameSession::difficulty))
            .unwrap_or(Difficulty::Easy);

        manager.reset_game();
        manager.start_game(mode, difficulty);
    }
    Ok(())
}
