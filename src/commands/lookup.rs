//! Dictionary lookup commands
//!
//! Inspect the dictionary without playing: define a word, or list the target candidates of
//! a length.

use crate::dictionary::{Dictionary, WordSource};

/// Result of looking up a single word
pub struct LookupResult {
    pub word: String,
    /// Whether the word would be accepted as a guess
    pub known: bool,
    /// First sense, if any
    pub meaning: Option<String>,
}

/// Target candidates of one length
pub struct TargetsResult {
    pub length: usize,
    pub words: Vec<String>,
}

/// Look up `word` in the dictionary
pub fn lookup_word<S: WordSource>(dictionary: &Dictionary<S>, word: &str) -> LookupResult {
    let word = word.trim().to_lowercase();

    LookupResult {
        known: dictionary.contains(&word),
        meaning: dictionary.meaning(&word).map(ToString::to_string),
        word,
    }
}

/// Words of `length` letters that can be chosen as targets
pub fn list_targets<S: WordSource>(dictionary: &Dictionary<S>, length: usize) -> TargetsResult {
    TargetsResult {
        length,
        words: dictionary.words_of_length(length, true),
    }
}
