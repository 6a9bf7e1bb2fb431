//! Word set construction
//!
//! Builds normalized, deduplicated word sets from the embedded constants or
//! from a plain-text file (one word per line).

use crate::core::{Code, Mode};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// An ordered, deduplicated set of 5-letter words with fast membership tests
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl WordSet {
    /// Build a set from arbitrary strings, skipping anything that is not a
    /// 5-letter word
    pub fn from_words<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut set = Self::default();
        for word in words {
            if let Ok(code) = Code::parse(Mode::Lexical, word.as_ref()) {
                set.insert(code.into_string());
            }
        }
        set
    }

    /// Convert an embedded string slice to a word set
    ///
    /// # Examples
    /// ```
    /// use codebreaker::wordlists::ANSWERS;
    /// use codebreaker::wordlists::loader::WordSet;
    ///
    /// let words = WordSet::from_slice(ANSWERS);
    /// assert_eq!(words.len(), ANSWERS.len());
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::from_words(slice.iter().copied())
    }

    /// Load words from a file, skipping blank and invalid lines
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_words(content.lines()))
    }

    fn insert(&mut self, word: String) {
        if self.index.insert(word.clone()) {
            self.words.push(word);
        }
    }

    /// Case-insensitive membership test on the trimmed input
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_ascii_lowercase())
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_slice_normalizes_and_skips_invalid() {
        let words = WordSet::from_slice(&["Crane", "toolong", "abc", " slate ", "cran3"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words.words(), &["crane".to_string(), "slate".to_string()]);
    }

    #[test]
    fn duplicates_collapse() {
        let words = WordSet::from_slice(&["crane", "CRANE", "crane"]);
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn contains_is_case_insensitive() {
        let words = WordSet::from_slice(&["crane"]);
        assert!(words.contains("CRANE"));
        assert!(words.contains(" crane\n"));
        assert!(!words.contains("slate"));
    }

    #[test]
    fn empty_input() {
        let words = WordSet::from_slice(&[]);
        assert!(words.is_empty());
        assert!(!words.contains("crane"));
    }

    #[test]
    fn load_from_file_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\n\nSLATE\nnope").unwrap();

        let words = WordSet::load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("slate"));
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(WordSet::load_from_file("/definitely/not/here.txt").is_err());
    }
}
