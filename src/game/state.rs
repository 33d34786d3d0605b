//! Mutable state of a single game

use std::collections::BTreeSet;
use std::fmt;

use super::GameConfig;
use crate::core::Feedback;

/// Phase of a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Choosing word length and chances
    #[default]
    Setup,
    /// Accepting guesses
    Play,
    /// Won or out of chances
    End,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Setup => "setup",
            Self::Play => "play",
            Self::End => "end",
        };
        write!(f, "{name}")
    }
}

/// Everything that changes during a game
///
/// Fields are only mutated by [`super::Game`]. `guesses` and `correct_positions_history`
/// always have the same length, which is also `chances_used`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    stage: Stage,
    config: Option<GameConfig>,
    target_word: Option<String>,
    guesses: Vec<String>,
    correct_positions_history: Vec<Vec<char>>,
    used_letters: BTreeSet<char>,
    incorrect_letters: BTreeSet<char>,
    chances_used: usize,
}

impl GameState {
    /// Fresh state in the setup stage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Settings of the current game; `None` during setup
    #[must_use]
    pub const fn config(&self) -> Option<&GameConfig> {
        self.config.as_ref()
    }

    /// The word to guess; `None` during setup
    #[must_use]
    pub fn target_word(&self) -> Option<&str> {
        self.target_word.as_deref()
    }

    /// Accepted guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// Correct-position letters of each accepted guess
    #[must_use]
    pub fn correct_positions_history(&self) -> &[Vec<char>] {
        &self.correct_positions_history
    }

    /// Every letter that appeared in an accepted guess
    #[must_use]
    pub const fn used_letters(&self) -> &BTreeSet<char> {
        &self.used_letters
    }

    /// Guessed letters that do not occur anywhere in the target
    #[must_use]
    pub const fn incorrect_letters(&self) -> &BTreeSet<char> {
        &self.incorrect_letters
    }

    #[must_use]
    pub const fn chances_used(&self) -> usize {
        self.chances_used
    }

    /// Guesses left before the game is lost; zero outside a game
    #[must_use]
    pub fn chances_remaining(&self) -> usize {
        self.config.map_or(0, |config| {
            config.max_chances().saturating_sub(self.chances_used)
        })
    }

    /// True once the last accepted guess was the target
    #[must_use]
    pub fn is_won(&self) -> bool {
        match (self.guesses.last(), &self.target_word) {
            (Some(guess), Some(target)) => guess == target,
            _ => false,
        }
    }

    /// Each accepted guess paired with its feedback, oldest first
    ///
    /// Feedback is recomputed from the target, so it matches what was reported when the
    /// guess was submitted.
    #[must_use]
    pub fn evaluated_guesses(&self) -> Vec<(&str, Feedback)> {
        let Some(target) = self.target_word.as_deref() else {
            return Vec::new();
        };

        self.guesses
            .iter()
            .map(|guess| (guess.as_str(), Feedback::evaluate(target, guess)))
            .collect()
    }

    /// Enter play with a chosen target, clearing any previous round
    pub(super) fn begin(&mut self, config: GameConfig, target_word: String) {
        *self = Self {
            stage: Stage::Play,
            config: Some(config),
            target_word: Some(target_word),
            ..Self::default()
        };
    }

    /// Record an accepted guess and its correct positions
    ///
    /// Letter sets compare against the whole target, so a letter is incorrect only when it
    /// appears nowhere in it.
    pub(super) fn record(&mut self, guess: String, correct_positions: Vec<char>) {
        if let Some(target) = self.target_word.as_deref() {
            for letter in guess.chars() {
                self.used_letters.insert(letter);
                if !target.contains(letter) {
                    self.incorrect_letters.insert(letter);
                }
            }
        }

        self.guesses.push(guess);
        self.correct_positions_history.push(correct_positions);
        self.chances_used += 1;
    }

    /// Enter the end stage
    pub(super) fn finish(&mut self) {
        self.stage = Stage::End;
    }

    /// Reset to a fresh setup state
    pub(super) fn reset(&mut self) {
        *self = Self::default();
    }
}
