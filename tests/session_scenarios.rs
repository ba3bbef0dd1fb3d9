//! End-to-end games driven through the public session API

use chrono::{NaiveDate, NaiveDateTime};
use daily_wordle::config::GameConfig;
use daily_wordle::core::{Feedback, ScoringRule, Word, score};
use daily_wordle::error::{ConfigError, GuessError};
use daily_wordle::game::{
    Effect, GamePhase, InputEvent, KeyState, Keyboard, Lifetime, Response, Session, TileState,
};
use daily_wordle::wordlists::loader::words_from_slice;
use daily_wordle::wordlists::{Dictionary, resolve_target_word};

const WORDS: &[&str] = &["crane", "crate", "slate", "trace", "abcde", "eabcd", "level"];

fn dictionary() -> Dictionary {
    Dictionary::from_words(&words_from_slice(WORDS))
}

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn date(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn session(target: &str) -> Session {
    Session::new(GameConfig::new(), word(target), dictionary())
}

#[test]
fn target_depends_only_on_the_calendar_day() {
    let answers = words_from_slice(&["slate", "crane", "trace"]);
    let epoch = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();

    let morning = resolve_target_word(date(2022, 1, 3, 0), epoch, &answers).unwrap();
    let night = resolve_target_word(date(2022, 1, 3, 23), epoch, &answers).unwrap();
    assert_eq!(morning, night);
    assert_eq!(morning.text(), "trace");

    assert_eq!(
        resolve_target_word(date(2022, 1, 4, 12), epoch, &answers),
        Err(ConfigError::IndexOutOfRange {
            offset: 3,
            available: 3
        })
    );
}

#[test]
fn sixth_letter_is_ignored() {
    let mut session = session("crane");
    for ch in "cranes".chars() {
        session.handle_input(InputEvent::Letter(ch));
    }
    assert_eq!(session.board().active_word(), "crane");
}

#[test]
fn enter_then_delete_restores_the_row() {
    let mut session = session("crane");
    session.handle_input(InputEvent::Letter('c'));
    let before = session.board().clone();

    session.handle_input(InputEvent::Letter('r'));
    session.handle_input(InputEvent::Delete);
    assert_eq!(session.board(), &before);
}

#[test]
fn short_guess_is_incomplete_and_changes_nothing() {
    let mut session = session("crane");
    for ch in "cra".chars() {
        session.handle_input(InputEvent::Letter(ch));
    }
    let before = session.board().clone();

    assert_eq!(
        session.handle_input(InputEvent::Enter),
        Response::Rejected(GuessError::IncompleteGuess)
    );
    assert_eq!(session.board(), &before);
    assert_eq!(session.phase(), GamePhase::AwaitingInput);
}

#[test]
fn unknown_word_is_rejected_with_shake() {
    let mut session = session("crane");
    assert_eq!(
        session.guess("qqqqq"),
        Response::Rejected(GuessError::UnknownWord)
    );
    assert_eq!(session.phase(), GamePhase::AwaitingInput);
    assert_eq!(session.drain_effects(), [Effect::Shake { row: 0 }]);
    assert_eq!(
        session.notifier().latest().map(|n| n.text.as_str()),
        Some("Not in word list!")
    );
}

#[test]
fn scoring_examples() {
    let crate_vs_crane = score(&word("crate"), &word("crane"));
    assert_eq!(crate_vs_crane, Feedback::parse("GGG-G").unwrap());

    let rotated = score(&word("abcde"), &word("eabcd"));
    assert_eq!(rotated, Feedback::parse("YYYYY").unwrap());

    // Same inputs, same verdicts
    assert_eq!(score(&word("crate"), &word("crane")), crate_vs_crane);
}

#[test]
fn repeated_letters_depend_on_scoring_rule() {
    let naive = ScoringRule::Naive.score(&word("level"), &word("lemon"));
    let standard = ScoringRule::Standard.score(&word("level"), &word("lemon"));
    assert_eq!(naive.to_string(), "GG-YY");
    assert_eq!(standard.to_string(), "GG---");
}

#[test]
fn standard_rule_is_used_when_configured() {
    let config = GameConfig {
        scoring: ScoringRule::Standard,
        ..GameConfig::new()
    };
    let dictionary = Dictionary::from_words(&words_from_slice(&["level", "lemon"]));
    let mut session = Session::new(config, word("lemon"), dictionary);

    session.guess("level");
    session.reveal_all();
    let row = &session.board().rows()[0];
    assert_eq!(row.feedback().unwrap().to_string(), "GG---");
}

#[test]
fn exact_guess_wins() {
    let mut session = session("crane");
    assert_eq!(session.guess("crane"), Response::RevealStarted);
    assert_eq!(session.reveal_all(), GamePhase::Won);

    let row = &session.board().rows()[0];
    assert!(row.tiles().iter().all(|t| t.state == TileState::Correct));
    assert!(!session.accepts_input());
}

#[test]
fn all_rows_wrong_loses_and_shows_target() {
    let mut session = session("crane");
    for guess in ["crate", "slate", "trace", "abcde", "eabcd", "level"] {
        assert_eq!(session.guess(guess), Response::RevealStarted);
        session.reveal_all();
    }

    assert_eq!(session.phase(), GamePhase::Lost);
    assert_eq!(session.revealed_target().map(Word::text), Some("crane"));
    let notice = session.notifier().latest().unwrap();
    assert_eq!(notice.text, "CRANE");
    assert_eq!(notice.lifetime, Lifetime::Persistent);
}

#[test]
fn win_on_last_row_is_a_win() {
    let config = GameConfig {
        rows: 2,
        ..GameConfig::new()
    };
    let mut session = Session::new(config, word("crane"), dictionary());
    session.guess("crate");
    session.reveal_all();
    session.guess("crane");

    assert_eq!(session.reveal_all(), GamePhase::Won);
    assert_eq!(session.share_text().lines().next(), Some("2/2"));
}

#[test]
fn input_during_reveal_is_ignored() {
    let mut session = session("crane");
    session.guess("slate");
    session.tile_revealed();
    session.tile_revealed();
    let before = session.board().clone();

    assert_eq!(session.handle_input(InputEvent::Letter('x')), Response::Ignored);
    assert_eq!(session.handle_input(InputEvent::Delete), Response::Ignored);
    assert_eq!(session.handle_input(InputEvent::Enter), Response::Ignored);
    assert_eq!(session.board(), &before);
    assert_eq!(session.phase(), GamePhase::Revealing);
}

#[test]
fn reveal_runs_left_to_right_and_decides_once() {
    let mut session = session("crane");
    session.guess("crane");

    for col in 0..5 {
        let phase = session.tile_revealed();
        let tiles = session.board().rows()[0].tiles();
        assert!(tiles[..=col].iter().all(|t| t.state == TileState::Correct));
        assert!(tiles[col + 1..].iter().all(|t| t.state == TileState::Active));
        let expected = if col == 4 { GamePhase::Won } else { GamePhase::Revealing };
        assert_eq!(phase, expected);
    }

    // Extra signals change nothing
    let notices = session.notifier().len();
    assert_eq!(session.tile_revealed(), GamePhase::Won);
    assert_eq!(session.notifier().len(), notices);
}

#[test]
fn keyboard_tracks_latest_verdict() {
    let mut session = session("trace");
    session.guess("crate");
    session.reveal_all();
    assert_eq!(session.keyboard().state('t'), Some(KeyState::WrongLocation));
    assert_eq!(session.keyboard().state('r'), Some(KeyState::Correct));
    assert_eq!(session.keyboard().state('q'), Some(KeyState::Unused));

    session.guess("trace");
    session.reveal_all();
    assert_eq!(session.keyboard().state('t'), Some(KeyState::Correct));
}

#[test]
fn missing_key_halts_the_session() {
    let keyboard = Keyboard::with_keys("crate".chars());
    let mut session = session("crane").with_keyboard(keyboard);
    session.guess("crane");

    // 'n' has no key
    session.reveal_all();
    assert_eq!(
        session.fatal_error(),
        Some(&ConfigError::MissingKeyMapping { letter: 'n' })
    );
    assert!(!session.accepts_input());
    assert_eq!(
        session.notifier().latest().map(|n| n.text.as_str()),
        Some("Keyboard has no key for 'n'")
    );
}

#[test]
fn day_outside_the_list_halts_before_play() {
    let answers = words_from_slice(&["crane"]);
    let mut session = Session::for_date(
        GameConfig::new(),
        date(2021, 6, 1, 12),
        &answers,
        dictionary(),
    );

    assert!(matches!(
        session.fatal_error(),
        Some(ConfigError::IndexOutOfRange { .. })
    ));
    assert_eq!(session.guess("crane"), Response::Ignored);
    assert_eq!(session.phase(), GamePhase::AwaitingInput);
}
