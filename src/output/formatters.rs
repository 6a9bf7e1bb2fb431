//! Formatting utilities for terminal output

use crate::core::{AttemptLimit, Difficulty};
use crate::game::GameSession;
use std::time::Duration;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Elapsed play time as `"1m 5s"` or `"42s"`
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    let (mins, secs) = (seconds / 60, seconds % 60);
    if mins > 0 {
        format!("{mins}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

/// `"3 / 10"` or `"3 / ∞"`
#[must_use]
pub fn attempts_label(session: &GameSession) -> String {
    format!("{} / {}", session.attempts().len(), session.max_attempts())
}

/// Headline for a finished game
#[must_use]
pub fn performance_message(session: &GameSession) -> &'static str {
    if session.is_won() != Some(true) {
        return "Better luck next time!";
    }

    let used = session.attempts().len();

    if session.difficulty() == Difficulty::Insane {
        return match used {
            0..=5 => "Unbelievable. 🧠",
            6..=10 => "Mind-blowing! 🤯",
            _ => "That was brutal. 🔥",
        };
    }

    match session.max_attempts() {
        AttemptLimit::Unlimited => match used {
            0..=5 => "Incredible! 🧠",
            6..=10 => "Great thinking! 💡",
            _ => "You cracked it! 🧩",
        },
        AttemptLimit::Finite(max) => {
            let percentage = used as f64 / f64::from(max.max(1)) * 100.0;
            if percentage <= 20.0 {
                "Incredible! 🏆"
            } else if percentage <= 40.0 {
                "Excellent! 🌟"
            } else if percentage <= 60.0 {
                "Great job! 👏"
            } else if percentage <= 80.0 {
                "Well done! 👍"
            } else {
                "Nice work! 😊"
            }
        }
    }
}
