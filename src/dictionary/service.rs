//! Dictionary lookups backing guess validation, target selection and meanings

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::{Lexicon, WordSource};

/// Meaning reported for words without a known sense
pub const NO_MEANING: &str = "No meaning found in the dictionary.";

/// Read-only dictionary over a [`WordSource`]
///
/// The lowercase word set is built once on construction. A `Dictionary` is never mutated
/// afterwards, so one instance can be shared by reference between any number of games.
#[derive(Debug)]
pub struct Dictionary<S = Lexicon> {
    source: S,
    words: FxHashSet<String>,
}

impl<S: WordSource> Dictionary<S> {
    /// Build the dictionary and its lookup set
    pub fn new(source: S) -> Self {
        let words: FxHashSet<String> = source.words().iter().map(|w| w.to_lowercase()).collect();
        info!(words = words.len(), "dictionary ready");

        Self { source, words }
    }

    /// Case-insensitive membership test
    ///
    /// # Examples
    /// ```
    /// use word_guess::dictionary::{Dictionary, Lexicon};
    ///
    /// let dictionary = Dictionary::new(Lexicon::from_entries(&[("robot", &[])]));
    /// assert!(dictionary.contains("ROBOT"));
    /// assert!(!dictionary.contains("robots"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    /// First known sense of `word`, or `None`
    #[must_use]
    pub fn meaning(&self, word: &str) -> Option<&str> {
        self.source
            .senses(&word.to_lowercase())
            .first()
            .map(String::as_str)
    }

    /// First known sense of `word`, or [`NO_MEANING`]
    #[must_use]
    pub fn define(&self, word: &str) -> &str {
        self.meaning(word).unwrap_or(NO_MEANING)
    }

    /// All distinct lowercase words of exactly `length` letters
    ///
    /// Only purely alphabetic words qualify, so every result can be typed as a guess. With
    /// `require_meaning` set, words without a sense are dropped. This scans the whole source
    /// and is meant for game setup, not per-guess use. The result is sorted.
    #[must_use]
    pub fn words_of_length(&self, length: usize, require_meaning: bool) -> Vec<String> {
        let mut words: Vec<String> = self
            .source
            .words()
            .par_iter()
            .map(|word| word.to_lowercase())
            .filter(|word| word.chars().count() == length)
            .filter(|word| word.chars().all(char::is_alphabetic))
            .filter(|word| !require_meaning || !self.source.senses(word).is_empty())
            .collect();

        words.sort_unstable();
        words.dedup();

        debug!(
            length,
            require_meaning,
            count = words.len(),
            "enumerated words of length"
        );
        words
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The underlying word source
    pub const fn source(&self) -> &S {
        &self.source
    }
}
