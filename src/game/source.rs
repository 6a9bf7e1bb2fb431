//! Answer generation and guess membership

use crate::core::Mode;
use crate::wordlists::loader::WordSet;
use crate::wordlists::{ALLOWED, ANSWERS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::fmt;

/// Supplies hidden targets and decides which word guesses are acceptable
pub trait AnswerSource {
    /// A fresh target for `mode`, already normalized
    fn generate_answer(&mut self, mode: Mode) -> String;

    /// Word-mode membership test (trimmed, case-insensitive)
    fn is_valid_guess(&self, text: &str) -> bool;
}

/// Error for word sets that cannot back a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    NoAnswers,
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnswers => write!(f, "Word list contains no usable 5-letter words"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Random targets drawn from word sets
pub struct WordListSource {
    answers: WordSet,
    allowed: WordSet,
    rng: StdRng,
}

impl WordListSource {
    /// Build a source from an answer set and an allowed-guess set
    ///
    /// Answers are merged into the allowed set so every target is guessable.
    ///
    /// # Errors
    /// Returns `SourceError::NoAnswers` if `answers` is empty.
    pub fn new(answers: WordSet, allowed: WordSet) -> Result<Self, SourceError> {
        Self::with_rng(answers, allowed, StdRng::from_os_rng())
    }

    /// Same as [`WordListSource::new`] with a reproducible random sequence
    ///
    /// # Errors
    /// Returns `SourceError::NoAnswers` if `answers` is empty.
    pub fn seeded(answers: WordSet, allowed: WordSet, seed: u64) -> Result<Self, SourceError> {
        Self::with_rng(answers, allowed, StdRng::seed_from_u64(seed))
    }

    fn with_rng(answers: WordSet, allowed: WordSet, rng: StdRng) -> Result<Self, SourceError> {
        if answers.is_empty() {
            return Err(SourceError::NoAnswers);
        }
        let allowed = WordSet::from_words(allowed.words().iter().chain(answers.words()));
        Ok(Self {
            answers,
            allowed,
            rng,
        })
    }

    /// Source backed by the embedded word lists
    ///
    /// # Errors
    /// Only fails if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, SourceError> {
        Self::new(WordSet::from_slice(ANSWERS), WordSet::from_slice(ALLOWED))
    }

    #[must_use]
    pub fn answers(&self) -> &WordSet {
        &self.answers
    }
}

impl AnswerSource for WordListSource {
    fn generate_answer(&mut self, mode: Mode) -> String {
        match mode {
            Mode::Numeric => (0..mode.code_length())
                .map(|_| char::from(b'0' + self.rng.random_range(0..10u8)))
                .collect(),
            Mode::Lexical => {
                // Non-empty by construction
                let index = self.rng.random_range(0..self.answers.len());
                self.answers.words()[index].clone()
            }
        }
    }

    fn is_valid_guess(&self, text: &str) -> bool {
        let normalized = text.trim();
        normalized.chars().count() == Mode::Lexical.code_length() && self.allowed.contains(normalized)
    }
}

/// Deterministic source that hands out queued answers in order
///
/// Useful for replays and tests. When the queue runs dry it falls back to
/// `0000` / the first allowed word.
#[derive(Debug, Clone, Default)]
pub struct FixedSource {
    queue: VecDeque<String>,
    allowed: WordSet,
}

impl FixedSource {
    pub fn new<I, T>(answers: I, allowed: &[&str]) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            queue: answers.into_iter().map(Into::into).collect(),
            allowed: WordSet::from_slice(allowed),
        }
    }
}

impl AnswerSource for FixedSource {
    fn generate_answer(&mut self, mode: Mode) -> String {
        self.queue.pop_front().unwrap_or_else(|| match mode {
            Mode::Numeric => "0000".to_string(),
            Mode::Lexical => self
                .allowed
                .words()
                .first()
                .cloned()
                .unwrap_or_else(|| "aaaaa".to_string()),
        })
    }

    fn is_valid_guess(&self, text: &str) -> bool {
        self.allowed.contains(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_source(seed: u64) -> WordListSource {
        WordListSource::seeded(
            WordSet::from_slice(&["crane", "slate"]),
            WordSet::from_slice(&["audio", "pious"]),
            seed,
        )
        .unwrap()
    }

    #[test]
    fn numeric_answers_are_four_digits() {
        let mut source = small_source(7);
        for _ in 0..200 {
            let answer = source.generate_answer(Mode::Numeric);
            assert_eq!(answer.len(), 4);
            assert!(answer.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn numeric_answers_cover_leading_zero() {
        let mut source = small_source(11);
        let saw_leading_zero =
            (0..2_000).any(|_| source.generate_answer(Mode::Numeric).starts_with('0'));
        assert!(saw_leading_zero);
    }

    #[test]
    fn lexical_answers_come_from_answer_set() {
        let mut source = small_source(3);
        for _ in 0..50 {
            let answer = source.generate_answer(Mode::Lexical);
            assert!(source.answers().contains(&answer));
        }
    }

    #[test]
    fn answers_are_always_valid_guesses() {
        let source = small_source(1);
        assert!(source.is_valid_guess("crane"));
        assert!(source.is_valid_guess("AUDIO"));
        assert!(source.is_valid_guess("  pious "));
        assert!(!source.is_valid_guess("zzzzz"));
        assert!(!source.is_valid_guess("cranes"));
    }

    #[test]
    fn empty_answer_set_rejected() {
        let result = WordListSource::new(WordSet::default(), WordSet::from_slice(&["crane"]));
        assert!(matches!(result, Err(SourceError::NoAnswers)));
    }

    #[test]
    fn seeded_sources_repeat() {
        let mut first = small_source(42);
        let mut second = small_source(42);
        for _ in 0..10 {
            assert_eq!(
                first.generate_answer(Mode::Numeric),
                second.generate_answer(Mode::Numeric)
            );
        }
    }

    #[test]
    fn embedded_source_builds() {
        let mut source = WordListSource::embedded().unwrap();
        let answer = source.generate_answer(Mode::Lexical);
        assert!(source.is_valid_guess(&answer));
    }

    #[test]
    fn fixed_source_hands_out_in_order() {
        let mut source = FixedSource::new(["1234", "5678"], &["crane"]);
        assert_eq!(source.generate_answer(Mode::Numeric), "1234");
        assert_eq!(source.generate_answer(Mode::Numeric), "5678");
        assert_eq!(source.generate_answer(Mode::Numeric), "0000");
        assert_eq!(source.generate_answer(Mode::Lexical), "crane");
    }
}
