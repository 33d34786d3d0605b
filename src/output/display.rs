//! Display functions for the line-based game and lookup commands

use std::collections::BTreeMap;

use super::formatters::{accuracy_bar, format_accuracy, join_letters};
use crate::commands::{LookupResult, TargetsResult};
use crate::core::{LetterMark, LetterStatus};
use crate::dictionary::NO_MEANING;
use crate::game::{GameState, GuessOutcome, Summary};
use colored::Colorize;

/// Print the correct and wrong position letters of a guess
pub fn print_feedback(outcome: &GuessOutcome) {
    let correct = outcome.correct_positions();
    let wrong = outcome.wrong_positions();

    println!();
    if correct.is_empty() && wrong.is_empty() {
        println!("{}", "No matching letters.".bright_black());
    }
    if !correct.is_empty() {
        println!(
            "Letters in correct position: {}",
            join_letters(correct).green().bold()
        );
    }
    if !wrong.is_empty() {
        println!(
            "Letters in wrong position:   {}",
            join_letters(wrong).yellow().bold()
        );
    }
    println!("{}", outcome.feedback.to_emoji());
}

/// Print every accepted guess with per-letter colouring
pub fn print_board(state: &GameState) {
    println!("\n{}", "─".repeat(40).cyan());
    for (turn, (guess, feedback)) in state.evaluated_guesses().iter().enumerate() {
        let letters: Vec<String> = guess
            .chars()
            .zip(feedback.marks())
            .map(|(letter, mark)| {
                let cell = format!(" {} ", letter.to_ascii_uppercase());
                match mark {
                    LetterMark::Correct => cell.black().on_green().bold().to_string(),
                    LetterMark::Misplaced => cell.black().on_yellow().to_string(),
                    LetterMark::Absent => cell.white().on_bright_black().to_string(),
                }
            })
            .collect();

        println!("{:>2}. {}", turn + 1, letters.join(" "));
    }
    println!("{}\n", "─".repeat(40).cyan());
}

/// Print the alphabet, crossing out letters known to be absent
pub fn print_alphabet(status: &BTreeMap<char, LetterStatus>) {
    let letters: Vec<String> = status
        .iter()
        .map(|(&letter, status)| {
            let letter = letter.to_ascii_uppercase().to_string();
            match status {
                LetterStatus::Incorrect => letter.red().strikethrough().to_string(),
                LetterStatus::Used => letter.green().bold().to_string(),
                LetterStatus::Unused => letter,
            }
        })
        .collect();

    println!("Letters: {}\n", letters.join(" "));
}

/// Print the word length and remaining chances
pub fn print_status(state: &GameState) {
    let Some(config) = state.config() else {
        return;
    };

    println!(
        "Word length: {}  Chances remaining: {}",
        config.word_length().to_string().bright_yellow(),
        state.chances_remaining().to_string().bright_yellow().bold()
    );
}

/// Print the end-of-game summary
pub fn print_summary(summary: &Summary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAME SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Word:          {}",
        summary.target_word.to_uppercase().bright_yellow().bold()
    );
    println!("   Meaning:       {}", summary.meaning);
    println!(
        "   Accuracy:      [{}] {}",
        accuracy_bar(summary.accuracy, 30).green(),
        format_accuracy(summary.accuracy).bright_yellow()
    );
    println!(
        "   Guesses used:  {} out of {}\n",
        summary.guesses_used, summary.max_chances
    );
}

/// Print the result of a `define` lookup
pub fn print_lookup_result(result: &LookupResult) {
    println!("\n{}", result.word.to_uppercase().bright_yellow().bold());

    if result.known {
        println!("   Accepted as a guess: {}", "yes".green());
    } else {
        println!("   Accepted as a guess: {}", "no".red());
    }

    match &result.meaning {
        Some(meaning) => println!("   Meaning: {meaning}"),
        None => println!("   Meaning: {}", NO_MEANING.bright_black()),
    }
}

/// Print the target candidates of one length
pub fn print_targets_result(result: &TargetsResult) {
    println!(
        "\n{} {}",
        format!("{}-letter targets:", result.length)
            .bright_cyan()
            .bold(),
        result.words.len()
    );

    for chunk in result.words.chunks(10) {
        println!("   {}", chunk.join(" "));
    }
}
