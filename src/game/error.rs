//! Error taxonomy for session operations

use crate::core::{CodeError, EvaluateError};
use std::fmt;

/// A guess the session refuses to record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Shape(CodeError),
    NotInWordList(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(error) => write!(f, "Invalid guess: {error}"),
            Self::NotInWordList(word) => {
                write!(f, "'{}' is not in the word list", word.to_uppercase())
            }
        }
    }
}

/// A custom game definition that cannot be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    InvalidAnswer(CodeError),
    ZeroAttempts,
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAnswer(error) => write!(f, "Invalid custom answer: {error}"),
            Self::ZeroAttempts => write!(f, "Max attempts must be at least 1 or unlimited"),
        }
    }
}

/// Operation attempted in the wrong session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    NoActiveGame,
    GameOver,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveGame => write!(f, "No game in progress"),
            Self::GameOver => write!(f, "This game is already over"),
        }
    }
}

/// Any failure surfaced by [`super::SessionManager`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Validation(ValidationError),
    InvalidDescriptor(DescriptorError),
    State(StateError),
    /// The stored answer no longer fits its mode (e.g. a hand-edited save)
    Corrupt(EvaluateError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(error) => error.fmt(f),
            Self::InvalidDescriptor(error) => error.fmt(f),
            Self::State(error) => error.fmt(f),
            Self::Corrupt(error) => write!(f, "Saved game is corrupt: {error}"),
        }
    }
}

impl std::error::Error for ValidationError {}
impl std::error::Error for DescriptorError {}
impl std::error::Error for StateError {}
impl std::error::Error for GameError {}

impl From<ValidationError> for GameError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<DescriptorError> for GameError {
    fn from(error: DescriptorError) -> Self {
        Self::InvalidDescriptor(error)
    }
}

impl From<StateError> for GameError {
    fn from(error: StateError) -> Self {
        Self::State(error)
    }
}

impl From<EvaluateError> for GameError {
    fn from(error: EvaluateError) -> Self {
        Self::Corrupt(error)
    }
}
