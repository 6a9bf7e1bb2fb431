//! Game variants, difficulty levels and attempt budgets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Puzzle variant
///
/// Serialized as `"number"` / `"word"`, the names used by share links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Guess a 4-digit code (digits may repeat, leading zeros allowed)
    #[serde(rename = "number")]
    Numeric,
    /// Guess a 5-letter word
    #[serde(rename = "word")]
    Lexical,
}

impl Mode {
    /// Number of symbols in a target for this mode
    #[inline]
    #[must_use]
    pub const fn code_length(self) -> usize {
        match self {
            Self::Numeric => 4,
            Self::Lexical => 5,
        }
    }

    /// Whether `symbol` belongs to this mode's alphabet
    ///
    /// Letters are accepted in either case; callers normalize before storing.
    #[inline]
    #[must_use]
    pub const fn accepts(self, symbol: char) -> bool {
        match self {
            Self::Numeric => symbol.is_ascii_digit(),
            Self::Lexical => symbol.is_ascii_alphabetic(),
        }
    }

    /// Link/serialization name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Numeric => "number",
            Self::Lexical => "word",
        }
    }

    /// Exact inverse of [`Mode::name`]
    ///
    /// Links only carry the canonical names; the looser aliases of `FromStr`
    /// are for typed input.
    #[must_use]
    pub fn from_link_name(name: &str) -> Option<Self> {
        match name {
            "number" => Some(Self::Numeric),
            "word" => Some(Self::Lexical),
            _ => None,
        }
    }

    /// Human-readable title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Numeric => "Number Mode",
            Self::Lexical => "Word Mode",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "number" | "numeric" | "n" => Ok(Self::Numeric),
            "word" | "lexical" | "w" => Ok(Self::Lexical),
            other => Err(format!("Unknown mode '{other}' (expected 'number' or 'word')")),
        }
    }
}

/// Maximum number of guesses a session allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptLimit {
    Finite(u32),
    Unlimited,
}

impl AttemptLimit {
    /// True once `used` attempts consume the whole budget
    #[inline]
    #[must_use]
    pub const fn is_exhausted(self, used: usize) -> bool {
        match self {
            Self::Finite(max) => used >= max as usize,
            Self::Unlimited => false,
        }
    }

    /// Attempts left after `used`, or `None` when unlimited
    #[inline]
    #[must_use]
    pub const fn remaining(self, used: usize) -> Option<usize> {
        match self {
            Self::Finite(max) => Some((max as usize).saturating_sub(used)),
            Self::Unlimited => None,
        }
    }
}

impl fmt::Display for AttemptLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(max) => write!(f, "{max}"),
            Self::Unlimited => f.write_str("∞"),
        }
    }
}

/// Difficulty level: an attempt budget plus a feedback-visibility policy
///
/// The visibility side lives in [`crate::core::filter_feedback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
    Insane,
}

impl Difficulty {
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Expert,
        Self::Insane,
    ];

    /// Attempt budget for a new session at this difficulty
    #[must_use]
    pub const fn attempt_limit(self) -> AttemptLimit {
        match self {
            Self::Easy => AttemptLimit::Finite(10),
            Self::Medium => AttemptLimit::Finite(7),
            Self::Hard => AttemptLimit::Finite(5),
            Self::Expert | Self::Insane => AttemptLimit::Unlimited,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
            Self::Insane => "insane",
        }
    }

    /// One-line summary of what the player gets to see
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Easy => "Full positional feedback, 10 attempts",
            Self::Medium => "Full positional feedback, 7 attempts",
            Self::Hard => "Symbols confirmed, positions never shown, 5 attempts",
            Self::Expert => "Only exact hits revealed, unlimited attempts",
            Self::Insane => "Just a count of hits, unlimited attempts",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name() == wanted)
            .ok_or_else(|| format!("Unknown difficulty '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_names_are_strict() {
        assert_eq!(Mode::from_link_name("number"), Some(Mode::Numeric));
        assert_eq!(Mode::from_link_name("word"), Some(Mode::Lexical));
        for alias in ["n", "w", "numeric", "lexical", "Word", " number"] {
            assert_eq!(Mode::from_link_name(alias), None, "{alias}");
        }
        for mode in [Mode::Numeric, Mode::Lexical] {
            assert_eq!(Mode::from_link_name(mode.name()), Some(mode));
        }
    }

    #[test]
    fn mode_lengths() {
        assert_eq!(Mode::Numeric.code_length(), 4);
        assert_eq!(Mode::Lexical.code_length(), 5);
    }

    #[test]
    fn mode_alphabets() {
        assert!(Mode::Numeric.accepts('0'));
        assert!(!Mode::Numeric.accepts('a'));
        assert!(Mode::Lexical.accepts('Q'));
        assert!(!Mode::Lexical.accepts('7'));
        assert!(!Mode::Lexical.accepts('é'));
    }

    #[test]
    fn mode_parse_accepts_link_names() {
        assert_eq!("number".parse::<Mode>(), Ok(Mode::Numeric));
        assert_eq!("WORD".parse::<Mode>(), Ok(Mode::Lexical));
        assert!("colour".parse::<Mode>().is_err());
    }

    #[test]
    fn mode_serializes_with_link_names() {
        assert_eq!(serde_json::to_string(&Mode::Numeric).unwrap(), "\"number\"");
        assert_eq!(serde_json::to_string(&Mode::Lexical).unwrap(), "\"word\"");
    }

    #[test]
    fn difficulty_budgets() {
        assert_eq!(Difficulty::Easy.attempt_limit(), AttemptLimit::Finite(10));
        assert_eq!(Difficulty::Medium.attempt_limit(), AttemptLimit::Finite(7));
        assert_eq!(Difficulty::Hard.attempt_limit(), AttemptLimit::Finite(5));
        assert_eq!(Difficulty::Expert.attempt_limit(), AttemptLimit::Unlimited);
        assert_eq!(Difficulty::Insane.attempt_limit(), AttemptLimit::Unlimited);
    }

    #[test]
    fn difficulty_parse_round_trips_names() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.name().parse::<Difficulty>(), Ok(difficulty));
        }
        assert!("nightmare".parse::<Difficulty>().is_err());
    }

    #[test]
    fn finite_limit_exhaustion() {
        let limit = AttemptLimit::Finite(3);
        assert!(!limit.is_exhausted(2));
        assert!(limit.is_exhausted(3));
        assert_eq!(limit.remaining(1), Some(2));
        assert_eq!(limit.remaining(5), Some(0));
    }

    #[test]
    fn unlimited_never_exhausts() {
        assert!(!AttemptLimit::Unlimited.is_exhausted(usize::MAX));
        assert_eq!(AttemptLimit::Unlimited.remaining(100), None);
    }
}
