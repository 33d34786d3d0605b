//! Dictionary service
//!
//! Validates guesses and supplies meanings. The raw data comes from a [`WordSource`]; the
//! shipped source is a [`Lexicon`], either embedded in the binary or loaded from a file.

mod embedded;
mod lexicon;
pub mod loader;
mod service;

pub use embedded::{ENTRIES, ENTRIES_COUNT};
pub use lexicon::Lexicon;
pub use service::{Dictionary, NO_MEANING};

/// Supplier of raw dictionary data
///
/// Implementors must be cheap to query repeatedly; the [`Dictionary`] builds its own lookup
/// set once and only scans [`WordSource::words`] when enumerating target candidates.
pub trait WordSource: Send + Sync {
    /// Every known word, in source order
    fn words(&self) -> &[String];

    /// Definitions of a lowercase `word`, most common sense first
    ///
    /// Returns an empty slice when the word has no known meaning.
    fn senses(&self, word: &str) -> &[String];
}
