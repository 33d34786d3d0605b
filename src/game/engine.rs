//! Game orchestration

use std::collections::BTreeMap;

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use super::{GameConfig, GameState, Stage, WordSelector};
use crate::core::{Feedback, LetterStatus, accuracy, alphabet_status};
use crate::dictionary::{Dictionary, Lexicon, WordSource};
use crate::error::{GameError, GuessError, SetupError, UsageError};

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The guess as recorded (lowercase)
    pub guess: String,
    pub feedback: Feedback,
    /// Stage after the guess: still `Play`, or `End` on a win or the last chance
    pub stage_after: Stage,
    pub chances_remaining: usize,
}

impl GuessOutcome {
    /// Letters in their correct position
    #[must_use]
    pub fn correct_positions(&self) -> &[char] {
        self.feedback.correct_positions()
    }

    /// Letters present at another position
    #[must_use]
    pub fn wrong_positions(&self) -> &[char] {
        self.feedback.wrong_positions()
    }
}

/// End-of-game report
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub target_word: String,
    pub meaning: String,
    /// Percentage of guessed letters in their correct position
    pub accuracy: f64,
    pub guesses_used: usize,
    pub max_chances: usize,
    pub won: bool,
}

/// A single game driven through setup, play and end
///
/// The game owns its [`GameState`] and borrows a shared, read-only [`Dictionary`]. Every
/// operation checks the current stage first and reports a [`UsageError`] instead of acting
/// out of turn.
pub struct Game<'a, S: WordSource = Lexicon, R: Rng = StdRng> {
    dictionary: &'a Dictionary<S>,
    selector: WordSelector<R>,
    state: GameState,
}

impl<'a, S: WordSource, R: Rng> Game<'a, S, R> {
    /// Create a game in the setup stage
    pub fn new(dictionary: &'a Dictionary<S>, selector: WordSelector<R>) -> Self {
        Self::with_state(dictionary, selector, GameState::new())
    }

    /// Continue from a state previously taken out with [`Game::into_state`]
    pub const fn with_state(
        dictionary: &'a Dictionary<S>,
        selector: WordSelector<R>,
        state: GameState,
    ) -> Self {
        Self {
            dictionary,
            selector,
            state,
        }
    }

    /// Current state
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Give up the game and keep its state
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// The dictionary this game validates against
    pub const fn dictionary(&self) -> &'a Dictionary<S> {
        self.dictionary
    }

    /// Leave setup with a freshly selected target
    ///
    /// # Errors
    ///
    /// - [`UsageError::WrongStage`] outside the setup stage
    /// - [`SetupError::InvalidConfig`] if either value is out of range
    /// - [`SetupError::NoWordsAvailable`] if no meaningful word has `word_length` letters
    ///
    /// The state is unchanged on error.
    pub fn start(&mut self, word_length: usize, max_chances: usize) -> Result<(), GameError> {
        self.require_stage(Stage::Setup, "start a game")?;

        let config = GameConfig::new(word_length, max_chances)?;
        let target = self
            .selector
            .select_target(self.dictionary, config.word_length())
            .ok_or(SetupError::NoWordsAvailable {
                length: config.word_length(),
            })?;

        self.state.begin(config, target);
        info!(word_length, max_chances, "game started");
        Ok(())
    }

    /// Submit a guess
    ///
    /// The word is lowercased, then checked in order: alphabetic only, the configured length,
    /// present in the dictionary. An accepted guess is scored and recorded; the game ends when
    /// it equals the target or it used the last chance.
    ///
    /// # Errors
    ///
    /// - [`UsageError::WrongStage`] outside the play stage
    /// - [`GuessError`] for a rejected guess, leaving the state unchanged
    pub fn submit_guess(&mut self, word: &str) -> Result<GuessOutcome, GameError> {
        self.require_stage(Stage::Play, "submit a guess")?;
        let (Some(config), Some(target)) = (
            self.state.config().copied(),
            self.state.target_word().map(str::to_owned),
        ) else {
            return Err(self.wrong_stage(Stage::Play, "submit a guess").into());
        };

        let guess = word.to_lowercase();
        if let Err(err) = self.validate(&guess, config.word_length()) {
            debug!(%err, "guess rejected");
            return Err(err.into());
        }

        let feedback = Feedback::evaluate(&target, &guess);
        self.state.record(guess.clone(), feedback.correct_positions().to_vec());

        let won = guess == target;
        if won || self.state.chances_used() >= config.max_chances() {
            self.state.finish();
            info!(won, guesses = self.state.chances_used(), "game over");
        }

        debug!(
            correct = feedback.correct_positions().len(),
            misplaced = feedback.wrong_positions().len(),
            "guess accepted"
        );

        Ok(GuessOutcome {
            guess,
            feedback,
            stage_after: self.state.stage(),
            chances_remaining: self.state.chances_remaining(),
        })
    }

    /// Summarise a finished game
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::WrongStage`] unless the game has ended.
    pub fn summary(&self) -> Result<Summary, UsageError> {
        self.require_stage(Stage::End, "summarise the game")?;
        let (Some(config), Some(target)) = (self.state.config(), self.state.target_word()) else {
            return Err(self.wrong_stage(Stage::End, "summarise the game"));
        };

        Ok(Summary {
            target_word: target.to_string(),
            meaning: self.dictionary.define(target).to_string(),
            accuracy: accuracy(
                config.word_length(),
                self.state.guesses(),
                self.state.correct_positions_history(),
            ),
            guesses_used: self.state.guesses().len(),
            max_chances: config.max_chances(),
            won: self.state.is_won(),
        })
    }

    /// Go back to setup after a finished game
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::WrongStage`] unless the game has ended.
    pub fn restart(&mut self) -> Result<(), UsageError> {
        self.require_stage(Stage::End, "restart")?;
        self.state.reset();
        info!("game reset to setup");
        Ok(())
    }

    /// Status of each letter `a..=z` from the guesses so far
    #[must_use]
    pub fn alphabet_status(&self) -> BTreeMap<char, LetterStatus> {
        alphabet_status(self.state.used_letters(), self.state.incorrect_letters())
    }

    fn validate(&self, guess: &str, word_length: usize) -> Result<(), GuessError> {
        if guess.is_empty() || !guess.chars().all(char::is_alphabetic) {
            return Err(GuessError::NotAlphabetic);
        }

        let length = guess.chars().count();
        if length != word_length {
            return Err(GuessError::WrongLength {
                expected: word_length,
                actual: length,
            });
        }

        if !self.dictionary.contains(guess) {
            return Err(GuessError::NotInDictionary {
                word: guess.to_string(),
            });
        }

        Ok(())
    }

    fn require_stage(&self, expected: Stage, operation: &'static str) -> Result<(), UsageError> {
        if self.state.stage() == expected {
            Ok(())
        } else {
            Err(self.wrong_stage(expected, operation))
        }
    }

    fn wrong_stage(&self, expected: Stage, operation: &'static str) -> UsageError {
        let actual = self.state.stage();
        warn!(%expected, %actual, operation, "operation called in wrong stage");
        UsageError::WrongStage {
            operation,
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::new(Lexicon::from_entries(&[
            ("robot", &["a mechanism that can move automatically"]),
            ("boost", &["the act of giving hope or support"]),
            ("crane", &["lifts and moves heavy objects"]),
            ("slate", &["a fine-grained metamorphic rock"]),
            ("aahed", &[]),
            ("cat", &["feline"]),
        ]))
    }

    /// Start a 5-letter game and return the chosen target
    fn started<'a>(dictionary: &'a Dictionary, max_chances: usize) -> (Game<'a>, String) {
        let mut game = Game::new(dictionary, WordSelector::seeded(11));
        game.start(5, max_chances).unwrap();
        let target = game.state().target_word().unwrap().to_string();
        (game, target)
    }

    /// Valid guess that can never be the target: it has no meaning
    const NON_TARGET: &str = "aahed";

    #[test]
    fn start_enters_play_with_meaningful_target() {
        let dictionary = dictionary();
        let (game, target) = started(&dictionary, 6);

        assert_eq!(game.state().stage(), Stage::Play);
        assert_ne!(target, "aahed");
        assert_eq!(target.len(), 5);
        assert_eq!(game.state().chances_remaining(), 6);
    }

    #[test]
    fn start_rejects_invalid_config_without_mutation() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, WordSelector::seeded(1));

        for (length, chances) in [(2, 6), (9, 6), (5, 0), (5, 11)] {
            let result = game.start(length, chances);
            assert!(matches!(
                result,
                Err(GameError::Setup(SetupError::InvalidConfig { .. }))
            ));
            assert_eq!(game.state(), &GameState::new());
        }
    }

    #[test]
    fn start_without_candidates_stays_in_setup() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, WordSelector::seeded(1));

        assert_eq!(
            game.start(4, 6),
            Err(GameError::Setup(SetupError::NoWordsAvailable { length: 4 }))
        );
        assert_eq!(game.state(), &GameState::new());

        // a different length still works afterwards
        assert!(game.start(3, 6).is_ok());
        assert_eq!(game.state().target_word(), Some("cat"));
    }

    #[test]
    fn start_twice_is_usage_error() {
        let dictionary = dictionary();
        let (mut game, target) = started(&dictionary, 6);

        let result = game.start(5, 6);
        assert!(matches!(
            result,
            Err(GameError::Usage(UsageError::WrongStage {
                expected: Stage::Setup,
                actual: Stage::Play,
                ..
            }))
        ));
        assert_eq!(game.state().target_word(), Some(target.as_str()));
    }

    #[test]
    fn submit_guess_in_setup_is_usage_error() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, WordSelector::seeded(1));

        assert!(matches!(
            game.submit_guess("robot"),
            Err(GameError::Usage(UsageError::WrongStage {
                actual: Stage::Setup,
                ..
            }))
        ));
    }

    #[test]
    fn submit_guess_rejections_in_order() {
        let dictionary = dictionary();
        let (mut game, _) = started(&dictionary, 6);

        // not alphabetic wins over wrong length
        assert_eq!(
            game.submit_guess("ab1"),
            Err(GameError::Guess(GuessError::NotAlphabetic))
        );
        assert_eq!(
            game.submit_guess(""),
            Err(GameError::Guess(GuessError::NotAlphabetic))
        );
        assert_eq!(
            game.submit_guess("rob ot"),
            Err(GameError::Guess(GuessError::NotAlphabetic))
        );
        // wrong length wins over dictionary membership
        assert_eq!(
            game.submit_guess("cat"),
            Err(GameError::Guess(GuessError::WrongLength {
                expected: 5,
                actual: 3
            }))
        );
        assert_eq!(
            game.submit_guess("zzzzz"),
            Err(GameError::Guess(GuessError::NotInDictionary {
                word: "zzzzz".to_string()
            }))
        );

        assert_eq!(game.state().chances_used(), 0);
        assert!(game.state().guesses().is_empty());
        assert!(game.state().used_letters().is_empty());
        assert_eq!(game.state().stage(), Stage::Play);
    }

    #[test]
    fn submit_guess_is_case_insensitive() {
        let dictionary = dictionary();
        let (mut game, target) = started(&dictionary, 6);

        let outcome = game.submit_guess(&target.to_uppercase()).unwrap();
        assert_eq!(outcome.guess, target);
        assert_eq!(outcome.stage_after, Stage::End);
    }

    #[test]
    fn submit_guess_records_feedback() {
        let dictionary = dictionary();
        let (mut game, target) = started(&dictionary, 6);
        let guess = NON_TARGET;

        let outcome = game.submit_guess(guess).unwrap();
        let expected = Feedback::evaluate(&target, guess);

        assert_eq!(outcome.feedback, expected);
        assert_eq!(outcome.stage_after, Stage::Play);
        assert_eq!(outcome.chances_remaining, 5);
        assert_eq!(game.state().guesses(), &[guess.to_string()]);
        assert_eq!(
            game.state().correct_positions_history(),
            &[expected.correct_positions().to_vec()]
        );
    }

    #[test]
    fn winning_guess_ends_game() {
        let dictionary = dictionary();
        let (mut game, target) = started(&dictionary, 6);

        game.submit_guess(NON_TARGET).unwrap();
        let outcome = game.submit_guess(&target).unwrap();

        assert_eq!(outcome.stage_after, Stage::End);
        assert_eq!(outcome.correct_positions().len(), 5);
        assert!(outcome.wrong_positions().is_empty());

        let summary = game.summary().unwrap();
        assert!(summary.won);
        assert_eq!(summary.guesses_used, 2);
        assert_eq!(summary.target_word, target);
    }

    #[test]
    fn exhausting_chances_ends_game_with_loss() {
        let dictionary = dictionary();
        let (mut game, target) = started(&dictionary, 6);
        let guess = NON_TARGET;

        for turn in 1..=6 {
            let outcome = game.submit_guess(guess).unwrap();
            let expected = if turn == 6 { Stage::End } else { Stage::Play };
            assert_eq!(outcome.stage_after, expected);
        }

        assert_eq!(game.state().chances_used(), 6);
        let summary = game.summary().unwrap();
        assert!(!summary.won);
        assert_eq!(summary.guesses_used, 6);
        assert_eq!(summary.max_chances, 6);
        assert!(matches!(game.submit_guess(guess), Err(GameError::Usage(_))));
        assert_eq!(game.state().chances_used(), 6);
    }

    #[test]
    fn single_chance_game() {
        let dictionary = dictionary();
        let (mut game, target) = started(&dictionary, 1);

        let outcome = game.submit_guess(NON_TARGET).unwrap();
        assert_eq!(outcome.stage_after, Stage::End);
        assert_eq!(outcome.chances_remaining, 0);
    }

    #[test]
    fn summary_reports_meaning_and_accuracy() {
        let dictionary = dictionary();
        let (mut game, target) = started(&dictionary, 6);
        game.submit_guess(&target).unwrap();

        let summary = game.summary().unwrap();
        assert_eq!(summary.meaning, dictionary.define(&target));
        assert!((summary.accuracy - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_before_end_is_usage_error() {
        let dictionary = dictionary();
        let (game, _) = started(&dictionary, 6);

        assert!(matches!(
            game.summary(),
            Err(UsageError::WrongStage {
                expected: Stage::End,
                actual: Stage::Play,
                ..
            })
        ));
    }

    #[test]
    fn restart_returns_fresh_setup_state() {
        let dictionary = dictionary();
        let (mut game, target) = started(&dictionary, 6);
        game.submit_guess(NON_TARGET).unwrap();
        game.submit_guess(&target).unwrap();

        game.restart().unwrap();
        assert_eq!(game.state(), &GameState::new());
        assert!(game.alphabet_status().values().all(|s| *s == LetterStatus::Unused));

        // and a new game can start
        assert!(game.start(3, 2).is_ok());
    }

    #[test]
    fn restart_during_play_is_usage_error() {
        let dictionary = dictionary();
        let (mut game, _) = started(&dictionary, 6);

        assert!(game.restart().is_err());
        assert_eq!(game.state().stage(), Stage::Play);
    }

    #[test]
    fn alphabet_status_after_guess() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, WordSelector::seeded(5));
        game.start(3, 3).unwrap();
        assert_eq!(game.state().target_word(), Some("cat"));

        assert!(matches!(
            game.submit_guess("dog"),
            Err(GameError::Guess(GuessError::NotInDictionary { .. }))
        ));
        game.submit_guess("cat").unwrap();

        let status = game.alphabet_status();
        assert_eq!(status[&'c'], LetterStatus::Used);
        assert_eq!(status[&'d'], LetterStatus::Unused);
    }

    #[test]
    fn state_round_trips_through_into_state() {
        let dictionary = dictionary();
        let (mut game, target) = started(&dictionary, 6);
        game.submit_guess(NON_TARGET).unwrap();

        let state = game.into_state();
        let mut resumed = Game::with_state(&dictionary, WordSelector::seeded(0), state.clone());
        assert_eq!(resumed.state(), &state);

        let outcome = resumed.submit_guess(&target).unwrap();
        assert_eq!(outcome.stage_after, Stage::End);
        assert_eq!(resumed.state().chances_used(), 2);
    }
}
