//! Game configuration

use std::ops::RangeInclusive;

use crate::error::SetupError;

/// Allowed target word lengths
pub const WORD_LENGTH_RANGE: RangeInclusive<usize> = 3..=8;

/// Allowed number of chances per game
pub const MAX_CHANCES_RANGE: RangeInclusive<usize> = 1..=10;

/// Word length used when none is chosen
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Chances used when none are chosen
pub const DEFAULT_MAX_CHANCES: usize = 6;

/// Validated settings for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    max_chances: usize,
}

impl GameConfig {
    /// Create a configuration, checking both values against their allowed ranges
    ///
    /// # Errors
    /// Returns [`SetupError::InvalidConfig`] naming the first out-of-range field.
    ///
    /// # Examples
    /// ```
    /// use word_guess::game::GameConfig;
    ///
    /// let config = GameConfig::new(5, 6).unwrap();
    /// assert_eq!(config.word_length(), 5);
    ///
    /// assert!(GameConfig::new(2, 6).is_err());
    /// assert!(GameConfig::new(5, 11).is_err());
    /// ```
    pub fn new(word_length: usize, max_chances: usize) -> Result<Self, SetupError> {
        check_range("word length", word_length, &WORD_LENGTH_RANGE)?;
        check_range("max chances", max_chances, &MAX_CHANCES_RANGE)?;

        Ok(Self {
            word_length,
            max_chances,
        })
    }

    /// Number of letters in the target word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of guesses allowed
    #[inline]
    #[must_use]
    pub const fn max_chances(&self) -> usize {
        self.max_chances
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_chances: DEFAULT_MAX_CHANCES,
        }
    }
}

fn check_range(
    field: &'static str,
    value: usize,
    range: &RangeInclusive<usize>,
) -> Result<(), SetupError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(SetupError::InvalidConfig {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_accepts_bounds() {
        for length in WORD_LENGTH_RANGE {
            for chances in MAX_CHANCES_RANGE {
                assert!(GameConfig::new(length, chances).is_ok());
            }
        }
    }

    #[test]
    fn config_rejects_word_length_out_of_range() {
        for length in [0, 2, 9, 100] {
            assert_eq!(
                GameConfig::new(length, 6),
                Err(SetupError::InvalidConfig {
                    field: "word length",
                    value: length,
                    min: 3,
                    max: 8,
                })
            );
        }
    }

    #[test]
    fn config_rejects_chances_out_of_range() {
        for chances in [0, 11] {
            assert!(matches!(
                GameConfig::new(5, chances),
                Err(SetupError::InvalidConfig {
                    field: "max chances",
                    ..
                })
            ));
        }
    }

    #[test]
    fn config_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(
            GameConfig::new(config.word_length(), config.max_chances()),
            Ok(config)
        );
    }
}
