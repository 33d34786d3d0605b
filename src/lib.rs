//! Word Guess
//!
//! A Wordle-style word guessing game. Targets are drawn from a dictionary and restricted to
//! words with a known meaning, so the end-of-game summary can always explain the answer.
//!
//! # Quick Start
//!
//! ```rust
//! use word_guess::dictionary::{Dictionary, Lexicon};
//! use word_guess::game::{Game, Stage, WordSelector};
//!
//! let dictionary = Dictionary::new(Lexicon::embedded());
//! let mut game = Game::new(&dictionary, WordSelector::seeded(7));
//!
//! game.start(5, 6).unwrap();
//! let outcome = game.submit_guess("crane").unwrap();
//! println!("correct: {:?}", outcome.feedback.correct_positions());
//! assert!(matches!(outcome.stage_after, Stage::Play | Stage::End));
//! ```

// Core domain types
pub mod core;

// Dictionary service and embedded data
pub mod dictionary;

// Game state machine
pub mod game;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
