//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use super::{GameOptions, open_game};
use crate::core::{Code, Difficulty, Mode};
use crate::game::{AnswerSource, GameSession, GameStore, SessionManager, SessionState};
use crate::output::display::format_attempt;
use crate::output::{print_board, print_game_result};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, or if the
/// requested link cannot be played.
pub fn run_simple<S: AnswerSource, St: GameStore>(
    manager: &mut SessionManager<S, St>,
    options: &GameOptions,
) -> Result<(), String> {
    open_game(manager, options).map_err(|e| e.to_string())?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Codebreaker - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("  🟩 right symbol, right place");
    println!("  🟨 in the code, somewhere else");
    println!("  ⬜ not in the code (or already used up)\n");
    println!("Commands: 'quit' to exit, 'restart' for a new code, 'new <mode> <difficulty>', 'board'\n");

    print_intro(manager);

    loop {
        if manager.state().is_terminal() {
            if let (Some(session), stats) = (manager.session(), manager.stats()) {
                print_game_result(session, &stats);
            }

            match get_user_input("\nPlay again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    manager.restart_game();
                    println!("\n🔄 New game started!\n");
                    print_intro(manager);
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
            continue;
        }

        let input = get_user_input("Guess")?;
        let mode = manager.session().map_or(Mode::Numeric, GameSession::mode);

        match parse_line(&input, mode) {
            LineInput::Empty => {}
            LineInput::Quit => {
                println!("\n👋 Progress saved. Thanks for playing!\n");
                return Ok(());
            }
            LineInput::Restart => {
                manager.restart_game();
                println!("\n🔄 New code, same settings!\n");
                print_intro(manager);
            }
            LineInput::New(mode, difficulty) => match parse_new_args(mode, difficulty) {
                Ok((mode, difficulty)) => {
                    manager.reset_game();
                    manager.start_game(mode, difficulty);
                    println!("\n🔄 New game started!\n");
                    print_intro(manager);
                }
                Err(message) => println!("❌ {message}\n"),
            },
            LineInput::Board => {
                if let Some(session) = manager.session() {
                    print_board(session);
                }
            }
            LineInput::Guess(guess) => match manager.submit_guess(guess) {
                Ok(result) => {
                    println!("     {}", format_attempt(&result.attempt));
                    if result.state == SessionState::InProgress
                        && let Some(remaining) =
                            manager.session().and_then(GameSession::attempts_remaining)
                    {
                        println!("     {}", format!("{remaining} left").bright_black());
                    }
                }
                Err(error) => println!("❌ {error}\n"),
            },
        }
    }
}

/// One line typed during a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineInput<'a> {
    Empty,
    Quit,
    Restart,
    New(Option<&'a str>, Option<&'a str>),
    Board,
    Guess(&'a str),
}

/// Classify a line, giving guesses priority over commands
///
/// Anything shaped like a code for `mode` is a guess, so words such as
/// `board` stay playable. Unknown words go to the session as guesses and
/// come back with a validation error.
fn parse_line(input: &str, mode: Mode) -> LineInput<'_> {
    let trimmed = input.trim();
    if Code::parse(mode, trimmed).is_ok() {
        return LineInput::Guess(trimmed);
    }

    let mut words = trimmed.split_whitespace();
    let Some(command) = words.next() else {
        return LineInput::Empty;
    };

    match command.to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => LineInput::Quit,
        "restart" | "r" => LineInput::Restart,
        "new" => LineInput::New(words.next(), words.next()),
        "board" | "b" => LineInput::Board,
        _ => LineInput::Guess(trimmed),
    }
}

fn parse_new_args(mode: Option<&str>, difficulty: Option<&str>) -> Result<(Mode, Difficulty), String> {
    let mode = mode.map_or(Ok(Mode::Numeric), str::parse)?;
    let difficulty = difficulty.map_or(Ok(Difficulty::Easy), str::parse)?;
    Ok((mode, difficulty))
}

fn print_intro<S: AnswerSource, St: GameStore>(manager: &SessionManager<S, St>) {
    let Some(session) = manager.session() else {
        return;
    };

    println!("────────────────────────────────────────────────────────────");
    println!(
        "{} · {}{} · {} attempts",
        session.mode().title().bright_cyan().bold(),
        session.difficulty(),
        if session.is_custom() { " (custom)" } else { "" },
        session.max_attempts()
    );
    println!("{}", session.difficulty().description().bright_black());
    println!("────────────────────────────────────────────────────────────");

    if !session.attempts().is_empty() {
        println!("Resuming where you left off:");
        print_board(session);
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_shaped_input_is_a_guess() {
        assert_eq!(parse_line("board", Mode::Lexical), LineInput::Guess("board"));
        assert_eq!(parse_line(" Board ", Mode::Lexical), LineInput::Guess("Board"));
        assert_eq!(parse_line("exits", Mode::Lexical), LineInput::Guess("exits"));
        assert_eq!(parse_line("0042", Mode::Numeric), LineInput::Guess("0042"));
    }

    #[test]
    fn commands_outside_code_shape() {
        assert_eq!(parse_line("board", Mode::Numeric), LineInput::Board);
        assert_eq!(parse_line("b", Mode::Lexical), LineInput::Board);
        assert_eq!(parse_line("QUIT", Mode::Lexical), LineInput::Quit);
        assert_eq!(parse_line("restart", Mode::Lexical), LineInput::Restart);
        assert_eq!(
            parse_line("new word hard", Mode::Numeric),
            LineInput::New(Some("word"), Some("hard"))
        );
        assert_eq!(parse_line("   ", Mode::Numeric), LineInput::Empty);
    }

    #[test]
    fn unknown_input_goes_to_validation() {
        assert_eq!(parse_line("12", Mode::Numeric), LineInput::Guess("12"));
        assert_eq!(parse_line("hello there", Mode::Lexical), LineInput::Guess("hello there"));
    }

    #[test]
    fn board_answer_can_be_won() {
        use crate::game::{FixedSource, MemoryStore};

        let mut manager = SessionManager::new(
            FixedSource::new(["board"], &["board"]),
            MemoryStore::default(),
            true,
        );
        manager.start_game(Mode::Lexical, Difficulty::Easy);

        let LineInput::Guess(guess) = parse_line("board", Mode::Lexical) else {
            panic!("expected a guess");
        };
        assert_eq!(manager.submit_guess(guess).unwrap().state, SessionState::Won);
    }

    #[test]
    fn new_defaults_to_number_easy() {
        assert_eq!(
            parse_new_args(None, None),
            Ok((Mode::Numeric, Difficulty::Easy))
        );
    }

    #[test]
    fn new_parses_mode_and_difficulty() {
        assert_eq!(
            parse_new_args(Some("word"), Some("expert")),
            Ok((Mode::Lexical, Difficulty::Expert))
        );
    }

    #[test]
    fn new_rejects_unknown_names() {
        assert!(parse_new_args(Some("colour"), None).is_err());
        assert!(parse_new_args(Some("number"), Some("nightmare")).is_err());
    }
}
