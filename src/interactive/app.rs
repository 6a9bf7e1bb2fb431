//! TUI application state and logic

use crate::commands::{GameOptions, open_game};
use crate::core::{Difficulty, Mode};
use crate::game::{AnswerSource, GameSession, GameStore, SessionManager, SessionState};
use crate::output::formatters::performance_message;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S, St> {
    pub manager: SessionManager<S, St>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: AnswerSource, St: GameStore> App<S, St> {
    /// Wrap a manager, opening (or resuming) a game per `options`
    ///
    /// # Errors
    ///
    /// Returns an error if the requested link cannot be played.
    pub fn new(mut manager: SessionManager<S, St>, options: &GameOptions) -> Result<Self> {
        open_game(&mut manager, options)?;

        let mut app = Self {
            manager,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };

        let resumed = app
            .manager
            .session()
            .is_some_and(|session| !session.attempts().is_empty());
        if resumed {
            app.add_message("Welcome back! Your game was restored.", MessageStyle::Info);
        } else {
            app.add_message("Crack the code!", MessageStyle::Info);
        }
        app.announce_game();
        app.sync_mode();
        Ok(app)
    }

    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.manager.session()
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('r' | 'n') => self.restart(),
                KeyCode::Char('m') => self.switch_mode(),
                KeyCode::Char('d') => self.next_difficulty(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Tab => self.change_difficulty_before_first_guess(),
                KeyCode::Char(c) => self.handle_char(c),
                _ => {}
            },
        }
    }

    /// Add a symbol to the input if the current mode accepts it
    pub fn handle_char(&mut self, c: char) {
        let Some(mode) = self.session().map(GameSession::mode) else {
            return;
        };
        if mode.accepts(c) && self.input_buffer.chars().count() < mode.code_length() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();
        match self.manager.submit_guess(&input) {
            Ok(result) => {
                self.input_buffer.clear();
                match result.state {
                    SessionState::Won | SessionState::Lost => self.announce_result(),
                    SessionState::InProgress | SessionState::NotStarted => {
                        if let Some(remaining) =
                            self.session().and_then(GameSession::attempts_remaining)
                        {
                            self.add_message(
                                &format!("{remaining} attempts left"),
                                MessageStyle::Info,
                            );
                        }
                    }
                }
            }
            Err(error) => self.add_message(&error.to_string(), MessageStyle::Error),
        }
        self.sync_mode();
    }

    /// Fresh code, same settings
    pub fn restart(&mut self) {
        self.manager.restart_game();
        self.input_buffer.clear();
        self.add_message("New code, same settings.", MessageStyle::Info);
        self.announce_game();
        self.sync_mode();
    }

    /// Start a new game in the other mode
    pub fn switch_mode(&mut self) {
        let (mode, difficulty) = self.current_settings();
        let mode = match mode {
            Mode::Numeric => Mode::Lexical,
            Mode::Lexical => Mode::Numeric,
        };
        self.new_game(mode, difficulty);
    }

    /// Tab while guessing: only an untouched game may be swapped out
    fn change_difficulty_before_first_guess(&mut self) {
        let started = self
            .session()
            .is_some_and(|session| !session.attempts().is_empty());
        if started {
            self.add_message(
                "Difficulty can change before the first guess or once the game is over.",
                MessageStyle::Error,
            );
        } else {
            self.next_difficulty();
        }
    }

    /// Start a new game at the next difficulty (wrapping)
    pub fn next_difficulty(&mut self) {
        let (mode, difficulty) = self.current_settings();
        let index = Difficulty::ALL
            .iter()
            .position(|&d| d == difficulty)
            .unwrap_or_default();
        let next = Difficulty::ALL[(index + 1) % Difficulty::ALL.len()];
        self.new_game(mode, next);
    }

    pub fn new_game(&mut self, mode: Mode, difficulty: Difficulty) {
        self.manager.reset_game();
        self.manager.start_game(mode, difficulty);
        self.input_buffer.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.announce_game();
        self.sync_mode();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn current_settings(&self) -> (Mode, Difficulty) {
        self.session().map_or((Mode::Numeric, Difficulty::Easy), |session| {
            (session.mode(), session.difficulty())
        })
    }

    fn announce_game(&mut self) {
        let Some(session) = self.session() else {
            return;
        };
        let text = format!(
            "{} · {} · {}",
            session.mode().title(),
            session.difficulty(),
            session.difficulty().description()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    fn announce_result(&mut self) {
        let Some(session) = self.session() else {
            return;
        };
        let headline = performance_message(session);
        let won = session.is_won() == Some(true);
        let reveal = session
            .revealed_answer()
            .map(|answer| format!("The answer was {}", answer.to_uppercase()));

        if won {
            self.add_message(headline, MessageStyle::Success);
        } else {
            self.add_message(headline, MessageStyle::Error);
            if let Some(reveal) = reveal {
                self.add_message(&reveal, MessageStyle::Info);
            }
        }
        self.add_message(
            "Press 'r' to play again, 'm' to switch mode, 'd' for next difficulty, 'q' to quit.",
            MessageStyle::Info,
        );
    }

    fn sync_mode(&mut self) {
        self.input_mode = if self.manager.state().is_terminal() {
            InputMode::GameOver
        } else {
            InputMode::Guessing
        };
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: AnswerSource, St: GameStore>(app: App<S, St>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, S, St>(terminal: &mut Terminal<B>, mut app: App<S, St>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: AnswerSource,
    St: GameStore,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
