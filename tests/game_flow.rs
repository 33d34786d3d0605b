//! Full games driven through the public API

use word_guess::dictionary::{Dictionary, Lexicon};
use word_guess::error::{GameError, GuessError, SetupError, UsageError};
use word_guess::game::{Game, GameState, Stage, WordSelector};

/// Only "robot" has a meaning, so it is always the target
fn dictionary() -> Dictionary {
    Dictionary::new(Lexicon::from_entries(&[
        ("robot", &["a mechanism that can move automatically"]),
        ("boost", &[]),
        ("tubes", &[]),
        ("aahed", &[]),
    ]))
}

#[test]
fn game_won_on_exact_match() {
    let dictionary = dictionary();
    let mut game = Game::new(&dictionary, WordSelector::seeded(42));
    game.start(5, 6).unwrap();
    assert_eq!(game.state().target_word(), Some("robot"));

    let first = game.submit_guess("boost").unwrap();
    assert_eq!(first.correct_positions(), &['o', 't']);
    assert_eq!(first.wrong_positions(), &['b', 'o']);
    assert_eq!(first.stage_after, Stage::Play);
    assert_eq!(first.chances_remaining, 5);

    let second = game.submit_guess("ROBOT").unwrap();
    assert_eq!(second.stage_after, Stage::End);

    let summary = game.summary().unwrap();
    assert!(summary.won);
    assert_eq!(summary.target_word, "robot");
    assert_eq!(summary.meaning, "a mechanism that can move automatically");
    assert_eq!(summary.guesses_used, 2);
    assert_eq!(summary.max_chances, 6);
    // (2 + 5) / (5 * 2)
    assert!((summary.accuracy - 70.0).abs() < 1e-9);
}

#[test]
fn game_lost_after_last_chance() {
    let dictionary = dictionary();
    let mut game = Game::new(&dictionary, WordSelector::seeded(42));
    game.start(5, 3).unwrap();

    for guess in ["boost", "tubes"] {
        let outcome = game.submit_guess(guess).unwrap();
        assert_eq!(outcome.stage_after, Stage::Play);
    }
    let last = game.submit_guess("aahed").unwrap();
    assert_eq!(last.stage_after, Stage::End);
    assert_eq!(last.chances_remaining, 0);

    let summary = game.summary().unwrap();
    assert!(!summary.won);
    assert_eq!(summary.guesses_used, 3);
    assert_eq!(game.state().chances_used(), 3);

    assert!(matches!(
        game.submit_guess("robot"),
        Err(GameError::Usage(UsageError::WrongStage { .. }))
    ));
}

#[test]
fn rejected_guesses_change_nothing() {
    let dictionary = dictionary();
    let mut game = Game::new(&dictionary, WordSelector::seeded(42));
    game.start(5, 6).unwrap();
    game.submit_guess("boost").unwrap();
    let before = game.state().clone();

    let rejections = [
        ("rob0t", GuessError::NotAlphabetic),
        ("", GuessError::NotAlphabetic),
        (
            "robots",
            GuessError::WrongLength {
                expected: 5,
                actual: 6,
            },
        ),
        (
            "zzzzz",
            GuessError::NotInDictionary {
                word: "zzzzz".to_string(),
            },
        ),
    ];

    for (word, expected) in rejections {
        assert_eq!(game.submit_guess(word), Err(GameError::Guess(expected)));
        assert_eq!(game.state(), &before);
    }
}

#[test]
fn setup_failures_leave_game_in_setup() {
    let dictionary = dictionary();
    let mut game = Game::new(&dictionary, WordSelector::seeded(42));

    assert_eq!(
        game.start(4, 6),
        Err(GameError::Setup(SetupError::NoWordsAvailable { length: 4 }))
    );
    assert!(matches!(
        game.start(9, 6),
        Err(GameError::Setup(SetupError::InvalidConfig { .. }))
    ));
    assert!(matches!(
        game.start(5, 0),
        Err(GameError::Setup(SetupError::InvalidConfig { .. }))
    ));
    assert_eq!(game.state(), &GameState::new());
}

#[test]
fn restart_returns_to_fresh_setup() {
    let dictionary = dictionary();
    let mut game = Game::new(&dictionary, WordSelector::seeded(42));

    assert!(game.restart().is_err());

    game.start(5, 1).unwrap();
    assert!(game.restart().is_err());
    game.submit_guess("tubes").unwrap();
    assert_eq!(game.state().stage(), Stage::End);

    game.restart().unwrap();
    assert_eq!(game.state(), &GameState::new());

    game.start(5, 2).unwrap();
    assert_eq!(game.state().chances_remaining(), 2);
}

#[test]
fn one_dictionary_serves_many_games() {
    let dictionary = Dictionary::new(Lexicon::embedded());
    let mut games: Vec<Game> = (0..4)
        .map(|seed| Game::new(&dictionary, WordSelector::seeded(seed)))
        .collect();

    for game in &mut games {
        game.start(5, 6).unwrap();
    }
    for game in &games {
        let target = game.state().target_word().unwrap();
        assert!(dictionary.contains(target));
        assert!(dictionary.meaning(target).is_some());
    }
}
