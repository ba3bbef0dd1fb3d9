//! Guess scoring
//!
//! Two rules are available. [`ScoringRule::Naive`] is the game's rule and the
//! default: each position is judged on its own, so a repeated guess letter is
//! marked yellow wherever the target contains that letter at all.
//! [`ScoringRule::Standard`] reconciles letter frequencies the way the
//! newspaper puzzle does and is only used when explicitly configured.

use super::{Feedback, Verdict, WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Which scoring algorithm a session uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringRule {
    /// Exact position, then plain containment; no duplicate accounting
    #[default]
    Naive,
    /// Greens first, yellows drawn from the unmatched target letters
    Standard,
}

impl ScoringRule {
    /// Score `guess` against `target` under this rule
    #[must_use]
    pub fn score(self, guess: &Word, target: &Word) -> Feedback {
        match self {
            Self::Naive => score(guess, target),
            Self::Standard => score_standard(guess, target),
        }
    }
}

impl FromStr for ScoringRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "standard" => Ok(Self::Standard),
            other => Err(format!("Unknown scoring rule '{other}' (expected naive or standard)")),
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive => write!(f, "naive"),
            Self::Standard => write!(f, "standard"),
        }
    }
}

/// Score a guess position by position
///
/// For each position: same letter as the target there → correct; otherwise
/// the target contains the letter anywhere → wrong location; otherwise wrong.
///
/// # Examples
/// ```
/// use daily_wordle::core::{Feedback, Word, score};
///
/// let guess = Word::new("crate").unwrap();
/// let target = Word::new("crane").unwrap();
/// assert_eq!(score(&guess, &target), Feedback::parse("GGG-G").unwrap());
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> Feedback {
    let verdicts = std::array::from_fn(|i| {
        let letter = guess.char_at(i);
        if letter == target.char_at(i) {
            Verdict::Correct
        } else if target.has_letter(letter) {
            Verdict::WrongLocation
        } else {
            Verdict::Wrong
        }
    });

    Feedback::new(verdicts)
}

/// Score a guess with duplicate-letter reconciliation
///
/// # Algorithm
/// 1. First pass: mark exact matches and remove them from the available pool
/// 2. Second pass: mark wrong-location letters while the pool still has them
#[must_use]
pub fn score_standard(guess: &Word, target: &Word) -> Feedback {
    let mut result = [Verdict::Wrong; WORD_LENGTH];
    let mut target_available = target.char_counts();

    // First pass: exact position matches
    for (i, verdict) in result.iter_mut().enumerate() {
        let letter = guess.char_at(i);
        if letter == target.char_at(i) {
            *verdict = Verdict::Correct;
            if let Some(count) = target_available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: right letter, wrong position, from what remains
    for (i, verdict) in result.iter_mut().enumerate() {
        if *verdict == Verdict::Correct {
            continue;
        }
        if let Some(count) = target_available.get_mut(&guess.char_at(i))
            && *count > 0
        {
            *verdict = Verdict::WrongLocation;
            *count -= 1;
        }
    }

    Feedback::new(result)
}
