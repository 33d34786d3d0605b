//! Game state machine
//!
//! A [`Game`] moves through three stages: [`Stage::Setup`] until a target is chosen,
//! [`Stage::Play`] while guesses are accepted, and [`Stage::End`] once the target is found or
//! every chance is spent. Restarting returns to setup.

mod config;
mod engine;
mod selector;
mod state;

pub use config::{
    DEFAULT_MAX_CHANCES, DEFAULT_WORD_LENGTH, GameConfig, MAX_CHANCES_RANGE, WORD_LENGTH_RANGE,
};
pub use engine::{Game, GuessOutcome, Summary};
pub use selector::WordSelector;
pub use state::{GameState, Stage};
