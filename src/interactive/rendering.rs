//! TUI rendering with ratatui
//!
//! Setup, play and end screens of the word guessing game.

use super::app::{App, MessageStyle};
use crate::core::{LetterMark, LetterStatus};
use crate::dictionary::WordSource;
use crate::game::Stage;
use crate::output::formatters::format_accuracy;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: WordSource, R: Rng>(f: &mut Frame, app: &App<'_, S, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board or setup
            Constraint::Percentage(45), // Alphabet, summary, messages
        ])
        .split(chunks[1]);

    match app.stage() {
        Stage::Setup => render_setup(f, app, main_chunks[0]),
        Stage::Play | Stage::End => render_board(f, app, main_chunks[0]),
    }
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎮 WORD GUESS")
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

fn render_setup<S: WordSource, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let value = |n: usize| {
        Span::styled(
            format!("◀ {n:>2} ▶"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };

    let content = vec![
        Line::from(""),
        Line::from(vec![Span::raw("Word length:  "), value(app.setup_length)]),
        Line::from(vec![Span::raw("Chances:      "), value(app.setup_chances)]),
        Line::from(""),
        Line::from(Span::styled(
            "←/→ word length   ↑/↓ chances   Enter: start",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" New Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

/// Previous guesses coloured per position, then empty rows for the chances left
fn render_board<S: WordSource, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let state = app.game.state();
    let word_length = state.config().map_or(app.setup_length, |c| c.word_length());

    let mut lines: Vec<Line> = state
        .evaluated_guesses()
        .iter()
        .map(|(guess, feedback)| {
            let cells: Vec<Span> = guess
                .chars()
                .zip(feedback.marks())
                .flat_map(|(letter, &mark)| {
                    [
                        Span::styled(
                            format!(" {} ", letter.to_ascii_uppercase()),
                            mark_style(mark),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(cells)
        })
        .collect();

    let empty_row = " _  ".repeat(word_length);
    for _ in 0..state.chances_remaining() {
        lines.push(Line::styled(
            empty_row.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn mark_style(mark: LetterMark) -> Style {
    let base = Style::default().fg(Color::Black).add_modifier(Modifier::BOLD);
    match mark {
        LetterMark::Correct => base.bg(Color::Green),
        LetterMark::Misplaced => base.bg(Color::Yellow),
        LetterMark::Absent => base.fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_info_panel<S: WordSource, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    if app.stage() == Stage::End {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),    // Summary
                Constraint::Length(3), // Accuracy gauge
                Constraint::Length(7), // Messages
            ])
            .split(area);

        render_summary(f, app, chunks[0]);
        render_accuracy(f, app, chunks[1]);
        render_messages(f, app, chunks[2]);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Alphabet
                Constraint::Min(5),    // Messages
            ])
            .split(area);

        render_alphabet(f, app, chunks[0]);
        render_messages(f, app, chunks[1]);
    }
}

fn render_alphabet<S: WordSource, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let letters: Vec<Span> = app
        .game
        .alphabet_status()
        .into_iter()
        .map(|(letter, status)| {
            let style = match status {
                LetterStatus::Incorrect => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT),
                LetterStatus::Used => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                LetterStatus::Unused => Style::default().fg(Color::White),
            };
            Span::styled(format!("{} ", letter.to_ascii_uppercase()), style)
        })
        .collect();

    let alphabet = Paragraph::new(Line::from(letters))
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(alphabet, area);
}

fn render_summary<S: WordSource, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let Some(summary) = &app.summary else {
        return;
    };

    let (title, color) = if summary.won {
        (" 🎉 You Won! ", Color::Green)
    } else {
        (" Game Over ", Color::Red)
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Word:    "),
            Span::styled(
                summary.target_word.to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Meaning: {}", summary.meaning)),
        Line::from(format!(
            "Guesses used: {} out of {}",
            summary.guesses_used, summary.max_chances
        )),
    ];

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, area);
}

fn render_accuracy<S: WordSource, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let accuracy = app.summary.as_ref().map_or(0.0, |s| s.accuracy);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Accuracy ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(accuracy.clamp(0.0, 100.0).round() as u16)
        .label(format_accuracy(accuracy));
    f.render_widget(gauge, area);
}

fn render_messages<S: WordSource, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
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

fn render_input<S: WordSource, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let (title, content, color) = match app.stage() {
        Stage::Setup => (" Choose settings | Enter to start ", "", Color::Cyan),
        Stage::Play => (
            " Enter Guess | ESC to clear ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        Stage::End => (
            " Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
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

fn render_status<S: WordSource, R: Rng>(f: &mut Frame, app: &App<'_, S, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let stage_text = format!("Stage: {}", app.stage());
    f.render_widget(
        Paragraph::new(stage_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let chances_text = format!(
        "Chances left: {}",
        app.game.state().chances_remaining()
    );
    f.render_widget(
        Paragraph::new(chances_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = match app.stage() {
        Stage::Setup => "q: Quit | Enter: Start",
        Stage::Play => "Ctrl-C: Quit | Enter: Submit",
        Stage::End => "q: Quit | n: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, Lexicon};
    use crate::game::{Game, GameConfig, WordSelector};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_every_stage() {
        let dictionary = Dictionary::new(Lexicon::from_entries(&[("robot", &["machine"])]));
        let game = Game::new(&dictionary, WordSelector::seeded(3));
        let mut app = App::new(game, GameConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|f| ui(f, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("New Game"));

        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        terminal.draw(|f| ui(f, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("Board"));

        for c in "robot".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Accuracy"));
        assert!(text.contains("100.0%"));
    }
}
