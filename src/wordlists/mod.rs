//! Word lists for the daily puzzle
//!
//! The answer sequence and the extra allowed guesses are compiled into the
//! binary; [`loader`] reads replacement lists from disk.

pub mod dictionary;
pub mod loader;
pub mod source;

pub use dictionary::Dictionary;
pub use source::{DEFAULT_EPOCH, day_offset, resolve_target_word};

// Generated by build.rs from data/answers.txt and data/allowed.txt
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

/// Dictionary of every embedded word, answers included
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    let answers = loader::words_from_slice(ANSWERS);
    let allowed = loader::words_from_slice(ALLOWED);
    answers.iter().chain(&allowed).collect()
}
