//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use rand::Rng;

use crate::dictionary::WordSource;
use crate::error::{GameError, SetupError};
use crate::game::{Game, GameConfig, Stage, WORD_LENGTH_RANGE};
use crate::output::{print_alphabet, print_board, print_feedback, print_status, print_summary};

/// Run the simple interactive CLI mode
///
/// Plays games with `config` until the player quits. When no target exists for the chosen
/// length the player is asked for another one.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<S: WordSource, R: Rng>(
    game: &mut Game<'_, S, R>,
    config: GameConfig,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Guessing Game 🎮                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden word. After each guess you'll see which letters");
    println!("are in the correct position and which are in the wrong position.");
    println!("Type '/quit' at any prompt to exit.\n");

    let mut word_length = config.word_length();

    loop {
        // Setup
        while game.state().stage() == Stage::Setup {
            match game.start(word_length, config.max_chances()) {
                Ok(()) => {}
                Err(GameError::Setup(err @ SetupError::NoWordsAvailable { .. })) => {
                    println!("{}", format!("❌ {err}").red());
                    match prompt_word_length()? {
                        Some(length) => word_length = length,
                        None => return farewell(),
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }

        // Play
        while game.state().stage() == Stage::Play {
            print_status(game.state());
            print_alphabet(&game.alphabet_status());

            let Some(input) = get_user_input("Enter your guess")? else {
                return farewell();
            };
            if is_quit(&input) {
                return farewell();
            }

            match game.submit_guess(&input) {
                Ok(outcome) => {
                    print_feedback(&outcome);
                    print_board(game.state());
                }
                Err(GameError::Guess(err)) => println!("{}\n", format!("❌ {err}").red()),
                Err(err) => return Err(err.into()),
            }
        }

        // End
        let summary = game.summary()?;
        if summary.won {
            println!(
                "\n{}",
                "🎉 Congratulations! You guessed the correct word!"
                    .bright_green()
                    .bold()
            );
        } else {
            println!(
                "\n{}",
                format!("Game Over! The word was '{}'", summary.target_word)
                    .red()
                    .bold()
            );
        }
        print_summary(&summary);
        print_alphabet(&game.alphabet_status());

        let answer = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
        match answer.to_lowercase().as_str() {
            "yes" | "y" => {
                game.restart()?;
                println!("\n🔄 New game started!\n");
            }
            _ => return farewell(),
        }
    }
}

/// Ask for a new word length; `None` when the player quits
fn prompt_word_length() -> Result<Option<usize>> {
    let prompt = format!(
        "Choose word length ({}-{})",
        WORD_LENGTH_RANGE.start(),
        WORD_LENGTH_RANGE.end()
    );

    loop {
        let Some(input) = get_user_input(&prompt)? else {
            return Ok(None);
        };
        if is_quit(&input) {
            return Ok(None);
        }

        match input.parse::<usize>() {
            Ok(length) if WORD_LENGTH_RANGE.contains(&length) => return Ok(Some(length)),
            _ => println!("{}", "Please enter a number in range.".red()),
        }
    }
}

/// Commands start with '/' so they can never collide with a guess
fn is_quit(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "/quit" | "/q" | "/exit")
}

fn farewell() -> Result<()> {
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_commands_are_recognised() {
        for input in ["/quit", "/Q", "/EXIT"] {
            assert!(is_quit(input));
        }
        assert!(!is_quit("quit"));
        assert!(!is_quit("crane"));
    }
}
