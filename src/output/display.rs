//! Display functions for the line-based interface and subcommands

use super::formatters::{attempts_label, create_progress_bar, format_elapsed, performance_message};
use crate::core::{Feedback, FeedbackMark};
use crate::game::{Attempt, GameSession, ShareDescriptor, Stats};
use colored::{ColoredString, Colorize};

fn colored_symbol(symbol: char, mark: FeedbackMark) -> ColoredString {
    let cell = format!(" {} ", symbol.to_ascii_uppercase());
    match mark {
        FeedbackMark::Correct => cell.black().on_green().bold(),
        FeedbackMark::Misplaced => cell.black().on_yellow().bold(),
        FeedbackMark::Absent => cell.white().on_bright_black(),
        FeedbackMark::Hidden => cell.bright_white().on_black(),
    }
}

/// One board row: colored cells, or the plain guess plus a summary
#[must_use]
pub fn format_attempt(attempt: &Attempt) -> String {
    match attempt.feedback() {
        Feedback::Marks(marks) => attempt
            .guess()
            .chars()
            .zip(marks)
            .map(|(symbol, &mark)| colored_symbol(symbol, mark).to_string())
            .collect(),
        Feedback::Summary(summary) => format!(
            "{}  {}",
            attempt.guess().to_uppercase().bright_white().bold(),
            summary.to_string().cyan()
        ),
    }
}

/// Print every attempt so far
pub fn print_board(session: &GameSession) {
    for (i, attempt) in session.attempts().iter().enumerate() {
        println!(
            "  {} {}",
            format!("{:>2}.", i + 1).bright_black(),
            format_attempt(attempt)
        );
    }
}

/// Print the end-of-game summary
pub fn print_game_result(session: &GameSession, stats: &Stats) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if session.is_won() == Some(true) {
        println!(
            "  {}",
            "🎉  C O D E   C R A C K E D !  🎉".bright_green().bold()
        );
    } else {
        println!("  {}", "💥  Out of attempts".bright_red().bold());
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!("\n  {}", performance_message(session).bright_yellow().bold());
    if let Some(answer) = session.revealed_answer() {
        println!(
            "  The answer was {}",
            answer.to_uppercase().bright_white().bold()
        );
    }
    println!("  Attempts:   {}", attempts_label(session));
    if let Some(elapsed) = session.elapsed() {
        println!("  Time:       {}", format_elapsed(elapsed));
    }
    println!(
        "  Difficulty: {}{}",
        session.difficulty(),
        if session.is_custom() { " (custom)" } else { "" }
    );

    println!("\n  Share:");
    for attempt in session.attempts() {
        println!("    {}", attempt.feedback().to_emoji());
    }

    println!();
    print_stats(stats);
}

/// Print aggregate statistics
pub fn print_stats(stats: &Stats) {
    println!("📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.games_played);
    println!("   Won:             {}", stats.games_won);
    println!(
        "   Win rate:        [{}] {:.0}%",
        create_progress_bar(stats.win_rate(), 100.0, 20).green(),
        stats.win_rate()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);
}

/// Print a freshly created share link
pub fn print_share_link(descriptor: &ShareDescriptor, token: &str, url: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " {} {} ({} attempts)",
        "CUSTOM GAME:".bright_cyan().bold(),
        descriptor.mode.title(),
        descriptor.max_attempts
    );
    println!("{}", "─".repeat(60).cyan());
    println!("   Code: {}", token.bright_yellow());
    println!("   Link: {}", url.bright_white().underline());
}
