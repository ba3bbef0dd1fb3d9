//! Core domain types for the daily puzzle
//!
//! Words, per-letter verdicts and the scoring rules. Everything here is pure
//! and independent of the game session.

mod scorer;
mod verdict;
mod word;

pub use scorer::{ScoringRule, score, score_standard};
pub use verdict::{Feedback, Verdict};
pub use word::{WORD_LENGTH, Word, WordError};
