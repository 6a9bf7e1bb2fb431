//! TUI rendering with ratatui
//!
//! Board, attempt budget and statistics for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{AttemptLimit, Feedback, FeedbackMark};
use crate::game::{AnswerSource, Attempt, GameSession, GameStore};
use crate::output::formatters::{attempts_label, format_elapsed};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: AnswerSource, St: GameStore>(f: &mut Frame, app: &App<S, St>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app.session(), chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app.session(), main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, session: Option<&GameSession>, area: Rect) {
    let title = session.map_or_else(
        || "🔐 CODEBREAKER".to_string(),
        |session| {
            format!(
                "🔐 CODEBREAKER - {} · {}{}",
                session.mode().title(),
                session.difficulty(),
                if session.is_custom() { " (custom)" } else { "" }
            )
        },
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn mark_style(mark: FeedbackMark) -> Style {
    let (fg, bg) = match mark {
        FeedbackMark::Correct => (Color::Black, Color::Green),
        FeedbackMark::Misplaced => (Color::Black, Color::Yellow),
        FeedbackMark::Absent => (Color::White, Color::DarkGray),
        FeedbackMark::Hidden => (Color::Gray, Color::Black),
    };
    Style::new().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn attempt_line(number: usize, attempt: &Attempt) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{number:>3}  "),
        Style::default().fg(Color::DarkGray),
    )];

    match attempt.feedback() {
        Feedback::Marks(marks) => {
            for (symbol, &mark) in attempt.guess().chars().zip(marks) {
                spans.push(Span::styled(
                    format!(" {} ", symbol.to_ascii_uppercase()),
                    mark_style(mark),
                ));
                spans.push(Span::raw(" "));
            }
        }
        Feedback::Summary(summary) => {
            spans.push(Span::styled(
                attempt.guess().to_uppercase(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                summary.to_string(),
                Style::default().fg(Color::Cyan),
            ));
        }
    }

    Line::from(spans)
}

fn empty_line(number: usize, length: usize) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{number:>3}  "),
        Style::default().fg(Color::DarkGray),
    )];
    for _ in 0..length {
        spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Rows that fit in `visible` lines: the newest attempts, then empty rows
/// for what is left of the budget
///
/// While the game is running one row is kept for the next guess. Only the
/// rows that are shown get built, whatever the budget.
fn board_lines(session: &GameSession, visible: usize) -> Vec<Line<'static>> {
    let attempts = session.attempts();
    let used = attempts.len();
    let length = session.mode().code_length();

    let pending = if session.is_complete() {
        0
    } else {
        match session.max_attempts() {
            AttemptLimit::Finite(max) => (max as usize).saturating_sub(used),
            AttemptLimit::Unlimited => 1,
        }
    };

    let reserved = pending.min(1).min(visible);
    let shown = used.min(visible - reserved);
    let placeholders = pending.min(visible - shown);

    attempts[used - shown..]
        .iter()
        .enumerate()
        .map(|(i, attempt)| attempt_line(used - shown + i + 1, attempt))
        .chain((used..used + placeholders).map(|i| empty_line(i + 1, length)))
        .collect()
}

fn render_board(f: &mut Frame, session: Option<&GameSession>, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(session) = session else {
        f.render_widget(Paragraph::new("No game in progress").block(block), area);
        return;
    };

    let visible = usize::from(area.height.saturating_sub(2));
    f.render_widget(Paragraph::new(board_lines(session, visible)).block(block), area);
}

fn render_info_panel<S: AnswerSource, St: GameStore>(f: &mut Frame, app: &App<S, St>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(7), // Stats
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_attempts(f, app.session(), chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, session: Option<&GameSession>, area: Rect) {
    let (percent, label) = session.map_or((0, String::new()), |session| {
        let used = session.attempts().len();
        let percent = match session.max_attempts() {
            // Cast is safe: clamped to 100
            AttemptLimit::Finite(max) if max > 0 => {
                ((used * 100) / max as usize).min(100) as u16
            }
            AttemptLimit::Finite(_) | AttemptLimit::Unlimited => 0,
        };
        (percent, attempts_label(session))
    });

    let color = if percent >= 80 { Color::Red } else { Color::Cyan };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_stats<S: AnswerSource, St: GameStore>(f: &mut Frame, app: &App<S, St>, area: Rect) {
    let stats = app.manager.stats();

    let mut content = vec![
        Line::from(format!("Played:         {}", stats.games_played)),
        Line::from(format!("Win rate:       {:.0}%", stats.win_rate())),
        Line::from(format!("Current streak: {}", stats.current_streak)),
        Line::from(format!("Max streak:     {}", stats.max_streak)),
    ];
    if let Some(elapsed) = app.session().and_then(GameSession::elapsed) {
        content.push(Line::from(format!("Last game:      {}", format_elapsed(elapsed))));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Statistics ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages<S: AnswerSource, St: GameStore>(f: &mut Frame, app: &App<S, St>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S: AnswerSource, St: GameStore>(f: &mut Frame, app: &App<S, St>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | r: play again  m: switch mode  d: next difficulty  q: quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => {
            let length = app
                .session()
                .map_or(0, |session| session.mode().code_length());
            let pending = length.saturating_sub(app.input_buffer.chars().count());
            (
                " Your guess | Enter to submit ",
                format!("{}{}", app.input_buffer.to_uppercase(), "_".repeat(pending)),
                Color::Yellow,
            )
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: AnswerSource, St: GameStore>(f: &mut Frame, app: &App<S, St>, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Guessing => "Esc: Quit (progress is saved) | Tab: Difficulty (before first guess) | Enter: Submit",
        InputMode::GameOver => "q: Quit | r: Restart | m: Mode | d: Difficulty",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
