//! TUI application state and logic

use crate::dictionary::{Lexicon, WordSource};
use crate::error::GameError;
use crate::game::{Game, GameConfig, MAX_CHANCES_RANGE, Stage, Summary, WORD_LENGTH_RANGE};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, warn};

/// Most messages kept in the message panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, S: WordSource = Lexicon, R: Rng = StdRng> {
    pub game: Game<'a, S, R>,
    /// Word length chosen on the setup screen
    pub setup_length: usize,
    /// Chances chosen on the setup screen
    pub setup_chances: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    /// Summary of the last finished game, shown on the end screen
    pub summary: Option<Summary>,
    pub should_quit: bool,
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

/// Results across the games of one session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses used, indexed by guess count
    pub guess_distribution: [usize; *MAX_CHANCES_RANGE.end() + 1],
}

impl Statistics {
    /// Percentage of finished games that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    fn record(&mut self, summary: &Summary) {
        self.total_games += 1;
        if summary.won {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(summary.guesses_used) {
                *slot += 1;
            }
        }
    }
}

impl<'a, S: WordSource, R: Rng> App<'a, S, R> {
    /// New app on the setup screen, preset to `config`
    pub fn new(game: Game<'a, S, R>, config: GameConfig) -> Self {
        Self {
            game,
            setup_length: config.word_length(),
            setup_chances: config.max_chances(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the hidden word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "←/→ word length, ↑/↓ chances, Enter to start".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            summary: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.game.state().stage()
    }

    /// Handle one key press for the current stage
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.stage() {
            Stage::Setup => self.handle_setup_key(key.code),
            Stage::Play => self.handle_play_key(key.code),
            Stage::End => self.handle_end_key(key.code),
        }
    }

    fn handle_setup_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => {
                self.setup_length = self
                    .setup_length
                    .saturating_sub(1)
                    .max(*WORD_LENGTH_RANGE.start());
            }
            KeyCode::Right => {
                self.setup_length = (self.setup_length + 1).min(*WORD_LENGTH_RANGE.end());
            }
            KeyCode::Down => {
                self.setup_chances = self
                    .setup_chances
                    .saturating_sub(1)
                    .max(*MAX_CHANCES_RANGE.start());
            }
            KeyCode::Up => {
                self.setup_chances = (self.setup_chances + 1).min(*MAX_CHANCES_RANGE.end());
            }
            KeyCode::Enter => self.start_game(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_play_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_alphabetic() => {
                if self.input_buffer.chars().count() < self.setup_length {
                    self.input_buffer.extend(c.to_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_input(),
            KeyCode::Esc => {
                if self.input_buffer.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input_buffer.clear();
                }
            }
            _ => {}
        }
    }

    fn handle_end_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('n') | KeyCode::Enter => self.play_again(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    /// Start a game with the settings chosen on the setup screen
    pub fn start_game(&mut self) {
        match self.game.start(self.setup_length, self.setup_chances) {
            Ok(()) => {
                self.messages.clear();
                self.summary = None;
                self.input_buffer.clear();
                self.add_message(
                    &format!(
                        "Guess the {}-letter word in {} chances",
                        self.setup_length, self.setup_chances
                    ),
                    MessageStyle::Info,
                );
            }
            Err(err) => {
                warn!(%err, "could not start game");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Submit the typed word as a guess
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.game.submit_guess(&input) {
            Ok(outcome) => {
                let feedback = &outcome.feedback;
                self.add_message(
                    &format!("{} {}", outcome.guess.to_uppercase(), feedback.to_emoji()),
                    MessageStyle::Info,
                );

                if outcome.stage_after == Stage::End {
                    self.finish_game();
                } else if feedback.is_miss() {
                    self.add_message("No matching letters.", MessageStyle::Info);
                }
            }
            Err(GameError::Guess(err)) => {
                // Keep the rejected word so it can be corrected
                self.input_buffer = input;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        let summary = match self.game.summary() {
            Ok(summary) => summary,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        self.stats.record(&summary);
        if summary.won {
            let celebration = match summary.guesses_used {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                _ => "🎉 Congratulations! You guessed the correct word!",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message(
                &format!(
                    "Game Over! The word was '{}'",
                    summary.target_word.to_uppercase()
                ),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        self.summary = Some(summary);
    }

    /// Return to the setup screen after a finished game
    pub fn play_again(&mut self) {
        if let Err(err) = self.game.restart() {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }

        self.summary = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message(
            "New game! Adjust the settings or press Enter.",
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource, R: Rng>(app: App<'_, S, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: WordSource, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            debug!(code = ?key.code, stage = %app.stage(), "key press");
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
