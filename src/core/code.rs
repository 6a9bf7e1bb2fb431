//! Validated guess/target strings
//!
//! A Code is a string of symbols that fits a mode's length and alphabet,
//! stored trimmed and lowercased so comparisons are case-insensitive.

use super::Mode;
use std::fmt;

/// A guess or target that matches its mode's shape
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    mode: Mode,
    text: String,
}

/// Error type for strings that do not fit a mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength { expected: usize, actual: usize },
    InvalidSymbol(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Expected exactly {expected} symbols, got {actual}")
            }
            Self::InvalidSymbol(symbol) => write!(f, "'{symbol}' is not allowed here"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Parse `text` as a code for `mode`
    ///
    /// # Errors
    /// Returns `CodeError` if the trimmed text has the wrong number of
    /// symbols or contains a symbol outside the mode's alphabet.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Code, Mode};
    ///
    /// let word = Code::parse(Mode::Lexical, " CRANE ").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Code::parse(Mode::Numeric, "12a4").is_err());
    /// ```
    pub fn parse(mode: Mode, text: &str) -> Result<Self, CodeError> {
        let trimmed = text.trim();
        let expected = mode.code_length();
        let actual = trimmed.chars().count();

        if actual != expected {
            return Err(CodeError::InvalidLength { expected, actual });
        }

        if let Some(bad) = trimmed.chars().find(|&c| !mode.accepts(c)) {
            return Err(CodeError::InvalidSymbol(bad));
        }

        Ok(Self {
            mode,
            text: trimmed.to_ascii_lowercase(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The normalized text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
