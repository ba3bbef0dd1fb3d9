//! Error taxonomy for the game session
//!
//! Two classes, handled differently:
//! - [`GuessError`]: the player can fix it by typing more. Shown as a short
//!   message plus a shake, never propagated past the submit call.
//! - [`ConfigError`]: the session is misconfigured. Shown as a persistent
//!   message and input stays suspended for the rest of the session.

use derive_more::{Display, Error};

/// A submitted guess the session refuses to score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GuessError {
    /// Fewer letters than the word length were entered
    #[display("Not enough letters!")]
    IncompleteGuess,
    /// The guess is not in the dictionary
    #[display("Not in word list!")]
    UnknownWord,
}

/// A fatal configuration or integrity problem
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// The day offset has no entry in the target word list
    #[display(
        "No puzzle for day {offset}: the word list covers days 0 to {}",
        available.saturating_sub(1)
    )]
    IndexOutOfRange { offset: i64, available: usize },
    /// A revealed letter has no key on the keyboard
    #[display("Keyboard has no key for '{letter}'")]
    MissingKeyMapping { letter: char },
    /// A collaborator the session cannot run without is absent
    #[display("Missing {name}")]
    MissingCollaborator { name: &'static str },
}
