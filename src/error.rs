//! Error types for the game and its dictionary

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::game::Stage;

/// A game could not leave the setup stage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("No meaningful words found of length {length}. Please try another length.")]
    NoWordsAvailable { length: usize },

    #[error("{field} must be between {min} and {max}, got {value}")]
    InvalidConfig {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

/// A guess was rejected; the game state is untouched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Please enter only alphabetic characters.")]
    NotAlphabetic,

    #[error("Please enter exactly {expected} letters.")]
    WrongLength { expected: usize, actual: usize },

    #[error("Word not in word-list. Please try again.")]
    NotInDictionary { word: String },
}

/// An operation was called in a stage that does not allow it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("cannot {operation} during the {actual} stage (requires {expected})")]
    WrongStage {
        operation: &'static str,
        expected: Stage,
        actual: Stage,
    },
}

/// Any error returned by [`crate::game::Game`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error(transparent)]
    Usage(#[from] UsageError),
}

/// Dictionary loading errors
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to read dictionary file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Dictionary line {line} has a definition but no word")]
    MissingWord { line: usize },

    #[error("Dictionary is empty")]
    Empty,
}
