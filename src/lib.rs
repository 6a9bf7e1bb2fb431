//! Codebreaker
//!
//! A code-breaking puzzle engine: guess a hidden 4-digit number or 5-letter
//! word, with feedback whose detail depends on the difficulty.
//!
//! # Quick Start
//!
//! ```rust
//! use codebreaker::core::{FeedbackMark, evaluate};
//!
//! let marks = evaluate("1123", "1111").unwrap();
//! assert_eq!(
//!     marks,
//!     [
//!         FeedbackMark::Correct,
//!         FeedbackMark::Correct,
//!         FeedbackMark::Absent,
//!         FeedbackMark::Absent,
//!     ]
//! );
//! ```

// Core domain types and pure rules
pub mod core;

// Sessions, stats, persistence and share links
pub mod game;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
