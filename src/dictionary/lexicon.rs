//! In-memory word source

use rustc_hash::FxHashMap;

use super::WordSource;
use super::embedded::ENTRIES;

/// Words and their senses held in memory
///
/// Words are stored lowercase and once each; adding a known word again appends senses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: Vec<String>,
    senses: FxHashMap<String, Vec<String>>,
}

impl Lexicon {
    /// Create an empty lexicon
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lexicon built from the dictionary embedded at compile time
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_entries(ENTRIES)
    }

    /// Build from `(word, senses)` pairs
    ///
    /// # Examples
    /// ```
    /// use word_guess::dictionary::{Lexicon, WordSource};
    ///
    /// let lexicon = Lexicon::from_entries(&[("Cat", &["a small feline"]), ("zzz", &[])]);
    /// assert_eq!(lexicon.words(), &["cat".to_string(), "zzz".to_string()]);
    /// assert_eq!(lexicon.senses("cat"), &["a small feline".to_string()]);
    /// assert!(lexicon.senses("zzz").is_empty());
    /// ```
    #[must_use]
    pub fn from_entries(entries: &[(&str, &[&str])]) -> Self {
        let mut lexicon = Self::new();
        for &(word, senses) in entries {
            lexicon.insert(word);
            for sense in senses {
                lexicon.add_sense(word, *sense);
            }
        }
        lexicon
    }

    /// Add a word without a sense; a no-op if it is already known
    pub fn insert(&mut self, word: &str) {
        let word = word.to_lowercase();
        if !self.senses.contains_key(&word) {
            self.senses.insert(word.clone(), Vec::new());
            self.words.push(word);
        }
    }

    /// Append a sense to `word`, adding the word if needed
    pub fn add_sense(&mut self, word: &str, sense: impl Into<String>) {
        self.insert(word);
        if let Some(senses) = self.senses.get_mut(&word.to_lowercase()) {
            senses.push(sense.into());
        }
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no words are known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for Lexicon {
    fn words(&self) -> &[String] {
        &self.words
    }

    fn senses(&self, word: &str) -> &[String] {
        self.senses.get(word).map_or(&[], Vec::as_slice)
    }
}
