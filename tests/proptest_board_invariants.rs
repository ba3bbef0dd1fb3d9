//! Property-based invariant tests for scoring and the guess board.
//!
//! 1. Scoring is pure: same inputs, same verdicts.
//! 2. A guess scored against itself is solved.
//! 3. Both scoring rules mark exactly the positional matches correct.
//! 4. Both rules agree when the guess has no repeated letter.
//! 5. The standard rule never credits a letter more often than the target has it.
//! 6. The active row never holds more than five letters.
//! 7. Entering then deleting a letter restores the board.
//! 8. No input event changes the board while a row is revealing.

use daily_wordle::config::GameConfig;
use daily_wordle::core::{ScoringRule, Verdict, WORD_LENGTH, Word, score, score_standard};
use daily_wordle::game::{Board, GamePhase, InputEvent, Response, Session};
use daily_wordle::wordlists::Dictionary;
use proptest::prelude::*;

fn word_strategy() -> impl Strategy<Value = Word> {
    "[a-z]{5}".prop_map(|s| Word::new(s).unwrap())
}

fn distinct_word_strategy() -> impl Strategy<Value = Word> {
    let alphabet: Vec<char> = ('a'..='z').collect();
    prop::sample::subsequence(alphabet, WORD_LENGTH)
        .prop_shuffle()
        .prop_map(|letters| Word::new(letters.into_iter().collect::<String>()).unwrap())
}

fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        prop::char::range('a', 'z').prop_map(InputEvent::Letter),
        Just(InputEvent::Enter),
        Just(InputEvent::Delete),
    ]
}

fn positional_matches(guess: &Word, target: &Word) -> Vec<usize> {
    (0..WORD_LENGTH)
        .filter(|&i| guess.char_at(i) == target.char_at(i))
        .collect()
}

fn correct_positions(verdicts: &[Verdict]) -> Vec<usize> {
    verdicts
        .iter()
        .enumerate()
        .filter(|(_, v)| **v == Verdict::Correct)
        .map(|(i, _)| i)
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// Scoring
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scoring_is_pure(guess in word_strategy(), target in word_strategy()) {
        prop_assert_eq!(score(&guess, &target), score(&guess, &target));
        prop_assert_eq!(score_standard(&guess, &target), score_standard(&guess, &target));
    }

    #[test]
    fn self_guess_is_solved(w in word_strategy()) {
        prop_assert!(score(&w, &w).is_solved());
        prop_assert!(score_standard(&w, &w).is_solved());
    }

    #[test]
    fn correct_means_positional_match(guess in word_strategy(), target in word_strategy()) {
        let expected = positional_matches(&guess, &target);
        for rule in [ScoringRule::Naive, ScoringRule::Standard] {
            let feedback = rule.score(&guess, &target);
            prop_assert_eq!(
                correct_positions(feedback.verdicts()),
                expected.clone(),
                "{} scored {} against {}",
                rule, guess, target
            );
        }
    }

    #[test]
    fn rules_agree_without_repeated_letters(
        guess in distinct_word_strategy(),
        target in word_strategy(),
    ) {
        prop_assert_eq!(score(&guess, &target), score_standard(&guess, &target));
    }

    #[test]
    fn standard_rule_respects_letter_counts(guess in word_strategy(), target in word_strategy()) {
        let feedback = score_standard(&guess, &target);
        for letter in b'a'..=b'z' {
            let credited = (0..WORD_LENGTH)
                .filter(|&i| guess.char_at(i) == letter && feedback.at(i) != Verdict::Wrong)
                .count();
            let available = target.chars().iter().filter(|&&c| c == letter).count();
            prop_assert!(
                credited <= available,
                "{} credited {} times for {} in {}",
                letter as char, credited, guess, target
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Board
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn active_row_saturates(letters in prop::collection::vec(prop::char::range('a', 'z'), 0..12)) {
        let mut board = Board::new(6);
        for &ch in &letters {
            board.enter_letter(ch);
        }
        let expected: String = letters.iter().take(WORD_LENGTH).collect();
        prop_assert_eq!(board.active_word(), expected);
    }

    #[test]
    fn enter_delete_round_trip(
        prefix in "[a-z]{0,4}",
        ch in prop::char::range('a', 'z'),
    ) {
        let mut board = Board::new(6);
        for c in prefix.chars() {
            board.enter_letter(c);
        }
        let before = board.clone();

        prop_assert!(board.enter_letter(ch));
        prop_assert!(board.delete_last_letter());
        prop_assert_eq!(board, before);
    }

    #[test]
    fn reveal_blocks_all_input(events in prop::collection::vec(event_strategy(), 1..20)) {
        let words = [Word::new("crane").unwrap(), Word::new("slate").unwrap()];
        let mut session = Session::new(
            GameConfig::new(),
            words[0].clone(),
            Dictionary::from_words(&words),
        );
        prop_assert_eq!(session.guess("slate"), Response::RevealStarted);
        session.tile_revealed();
        let before = session.board().clone();

        for event in events {
            prop_assert_eq!(session.handle_input(event), Response::Ignored);
        }
        prop_assert_eq!(session.board(), &before);
        prop_assert_eq!(session.phase(), GamePhase::Revealing);
    }
}
