//! Alphabet status shown next to the board

use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

/// Letters tracked by the alphabet display
pub const ALPHABET: RangeInclusive<char> = 'a'..='z';

/// What the player has learned about a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Never guessed
    Unused,
    /// Guessed and present somewhere in the target
    Used,
    /// Guessed and absent from the target
    Incorrect,
}

/// Status of every letter `a..=z`
///
/// The incorrect set is checked before the used set.
#[must_use]
pub fn alphabet_status(
    used_letters: &BTreeSet<char>,
    incorrect_letters: &BTreeSet<char>,
) -> BTreeMap<char, LetterStatus> {
    ALPHABET
        .map(|letter| {
            let status = if incorrect_letters.contains(&letter) {
                LetterStatus::Incorrect
            } else if used_letters.contains(&letter) {
                LetterStatus::Used
            } else {
                LetterStatus::Unused
            };
            (letter, status)
        })
        .collect()
}
