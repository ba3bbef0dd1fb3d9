//! Per-letter verdicts and whole-guess feedback
//!
//! A verdict is the outcome of comparing one guess letter against the target:
//! - Correct: letter in the correct position (green)
//! - `WrongLocation`: letter in the word, elsewhere (yellow)
//! - Wrong: letter not in the word (gray)
//!
//! `Feedback` is the ordered row of verdicts for one guess.

use super::WORD_LENGTH;
use std::fmt;

/// Outcome for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Correct,
    WrongLocation,
    Wrong,
}

impl Verdict {
    /// Square emoji used in shared results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongLocation => '🟨',
            Self::Wrong => '⬛',
        }
    }

    /// Single-letter code: G, Y or -
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::WrongLocation => 'Y',
            Self::Wrong => '-',
        }
    }

    const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::WrongLocation),
            '-' | '_' | '⬛' | '⬜' => Some(Self::Wrong),
            _ => None,
        }
    }
}

/// Verdicts for every position of one guess, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([Verdict::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Verdicts in position order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Verdict at a single position
    ///
    /// # Panics
    /// Panics if position >= [`WORD_LENGTH`]
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize) -> Verdict {
        self.0[position]
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count positions with the given verdict
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬛🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::{Feedback, Verdict};
    ///
    /// let feedback = Feedback::parse("GGG-G").unwrap();
    /// assert_eq!(feedback.at(3), Verdict::Wrong);
    /// assert_eq!(Feedback::parse("GGG-G"), Feedback::parse("🟩🟩🟩⬛🟩"));
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let verdicts: Vec<Verdict> = s.chars().map(Verdict::from_code).collect::<Option<_>>()?;
        verdicts.try_into().ok().map(Self)
    }

    /// Convert feedback to an emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.0 {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_solved_constant() {
        assert!(Feedback::SOLVED.is_solved());
        assert_eq!(Feedback::SOLVED.count(Verdict::Correct), 5);
        assert_eq!(Feedback::SOLVED.to_string(), "GGGGG");
    }

    #[test]
    fn feedback_parse_valid() {
        let p1 = Feedback::parse("GYG--").unwrap();
        let p2 = Feedback::parse("🟩🟨🟩⬛⬛").unwrap();
        let p3 = Feedback::parse("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.count(Verdict::Correct), 2);
        assert_eq!(p1.count(Verdict::WrongLocation), 1);
        assert_eq!(p1.count(Verdict::Wrong), 2);
    }

    #[test]
    fn feedback_parse_invalid() {
        assert!(Feedback::parse("GYGGYG").is_none()); // Too long
        assert!(Feedback::parse("GYG").is_none()); // Too short
        assert!(Feedback::parse("GXGGY").is_none()); // Invalid char
        assert!(Feedback::parse("").is_none());
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = Feedback::parse("GY-GY").unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬛🟩🟨");
    }

    #[test]
    fn feedback_not_solved_with_one_miss() {
        let feedback = Feedback::parse("GGGG-").unwrap();
        assert!(!feedback.is_solved());
    }
}
