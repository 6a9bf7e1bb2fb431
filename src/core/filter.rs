//! Difficulty-dependent information hiding
//!
//! The only place where difficulty decides what the player may learn from a
//! guess. Information revealed strictly decreases along
//! Easy = Medium, Hard, Expert, Insane (with misplaced count), Insane.

use super::feedback::{FeedbackMark, SummaryFeedback, count_marks};
use super::{Difficulty, Feedback};

/// Turn raw evaluator output into the feedback shown at `difficulty`
///
/// `show_misplaced` only matters for Insane, where it decides whether the
/// summary carries a misplaced count.
///
/// # Examples
/// ```
/// use codebreaker::core::{Difficulty, Feedback, FeedbackMark::*, filter_feedback};
///
/// let raw = [Correct, Misplaced, Absent, Absent];
/// assert_eq!(
///     filter_feedback(&raw, Difficulty::Hard, false),
///     Feedback::Marks(vec![Misplaced, Misplaced, Absent, Absent])
/// );
/// ```
#[must_use]
pub fn filter_feedback(
    raw: &[FeedbackMark],
    difficulty: Difficulty,
    show_misplaced: bool,
) -> Feedback {
    match difficulty {
        Difficulty::Easy | Difficulty::Medium => Feedback::Marks(raw.to_vec()),
        Difficulty::Hard => Feedback::Marks(
            raw.iter()
                .map(|&mark| match mark {
                    FeedbackMark::Correct => FeedbackMark::Misplaced,
                    other => other,
                })
                .collect(),
        ),
        Difficulty::Expert => Feedback::Marks(
            raw.iter()
                .map(|&mark| match mark {
                    FeedbackMark::Correct => FeedbackMark::Correct,
                    _ => FeedbackMark::Hidden,
                })
                .collect(),
        ),
        Difficulty::Insane => Feedback::Summary(SummaryFeedback {
            correct: count_marks(raw, FeedbackMark::Correct),
            misplaced: show_misplaced.then(|| count_marks(raw, FeedbackMark::Misplaced)),
        }),
    }
}
