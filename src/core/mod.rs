//! Core domain types for the puzzle
//!
//! Pure types and functions with no I/O: modes and difficulties, validated
//! codes, the evaluator and the difficulty filter.

mod code;
mod feedback;
mod filter;
mod mode;

pub use code::{Code, CodeError};
pub use feedback::{
    EvaluateError, Feedback, FeedbackMark, SummaryFeedback, count_marks, evaluate,
};
pub use filter::filter_feedback;
pub use mode::{AttemptLimit, Difficulty, Mode};
