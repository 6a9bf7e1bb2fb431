//! Guess evaluation and feedback representation
//!
//! Raw feedback is one mark per position:
//! - Correct: symbol in the right position
//! - Misplaced: symbol present elsewhere in the target
//! - Absent: symbol not (or no longer) available in the target
//! - Hidden: no information (only produced by the difficulty filter)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-position feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackMark {
    Correct,
    Misplaced,
    Absent,
    Hidden,
}

impl FeedbackMark {
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
            Self::Hidden => '⬛',
        }
    }
}

/// Aggregate feedback used where positions are not revealed at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryFeedback {
    pub correct: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub misplaced: Option<usize>,
}

impl fmt::Display for SummaryFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} correct", self.correct)?;
        if let Some(misplaced) = self.misplaced {
            write!(f, ", {misplaced} misplaced")?;
        }
        Ok(())
    }
}

/// Feedback as the player sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Marks(Vec<FeedbackMark>),
    Summary(SummaryFeedback),
}

impl Feedback {
    /// Render as emoji squares, or as text for a summary
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Feedback, FeedbackMark};
    ///
    /// let feedback = Feedback::Marks(vec![FeedbackMark::Correct, FeedbackMark::Absent]);
    /// assert_eq!(feedback.to_emoji(), "🟩⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        match self {
            Self::Marks(marks) => marks.iter().map(|mark| mark.emoji()).collect(),
            Self::Summary(summary) => summary.to_string(),
        }
    }
}

/// Error returned when guess and answer cannot be compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluateError {
    InvalidLength { guess: usize, answer: usize },
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { guess, answer } => write!(
                f,
                "Guess has {guess} symbols but the answer has {answer}"
            ),
        }
    }
}

impl std::error::Error for EvaluateError {}

/// Compute raw feedback for `guess` against `answer`
///
/// Handles duplicate symbols the same way the classic game does.
///
/// # Algorithm
/// 1. First pass: mark exact matches as Correct and consume those answer symbols
/// 2. Second pass: for each remaining guess symbol in order, consume the first
///    unconsumed occurrence in the answer (Misplaced) or mark it Absent
///
/// # Errors
/// Returns `EvaluateError::InvalidLength` if the strings differ in length.
///
/// # Examples
/// ```
/// use codebreaker::core::{evaluate, FeedbackMark::*};
///
/// assert_eq!(
///     evaluate("1123", "1111").unwrap(),
///     vec![Correct, Correct, Absent, Absent]
/// );
/// ```
pub fn evaluate(guess: &str, answer: &str) -> Result<Vec<FeedbackMark>, EvaluateError> {
    let guess: Vec<char> = guess.chars().collect();
    let mut remaining: Vec<Option<char>> = answer.chars().map(Some).collect();

    if guess.len() != remaining.len() {
        return Err(EvaluateError::InvalidLength {
            guess: guess.len(),
            answer: remaining.len(),
        });
    }

    let mut result = vec![FeedbackMark::Absent; guess.len()];

    // First pass: exact matches
    for (i, &symbol) in guess.iter().enumerate() {
        if remaining[i] == Some(symbol) {
            result[i] = FeedbackMark::Correct;
            remaining[i] = None;
        }
    }

    // Second pass: earliest unconsumed occurrence wins
    for (i, &symbol) in guess.iter().enumerate() {
        if result[i] == FeedbackMark::Correct {
            continue;
        }
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(symbol)) {
            *slot = None;
            result[i] = FeedbackMark::Misplaced;
        }
    }

    Ok(result)
}

/// Number of marks equal to `mark`
#[must_use]
pub fn count_marks(marks: &[FeedbackMark], mark: FeedbackMark) -> usize {
    marks.iter().filter(|&&m| m == mark).count()
}
