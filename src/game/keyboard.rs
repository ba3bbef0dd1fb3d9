//! On-screen keyboard state
//!
//! Every revealed tile recolours the key for its letter. The most recent
//! reveal wins, so a key can go from green back to yellow if a later guess
//! places the same letter elsewhere.

use crate::core::Verdict;
use crate::error::ConfigError;
use rustc_hash::FxHashMap;

/// Key rows, top to bottom
pub const LAYOUT: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Colour of one key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyState {
    #[default]
    Unused,
    Correct,
    WrongLocation,
    Wrong,
}

impl From<Verdict> for KeyState {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct => Self::Correct,
            Verdict::WrongLocation => Self::WrongLocation,
            Verdict::Wrong => Self::Wrong,
        }
    }
}

/// Letter keys and their colours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    keys: FxHashMap<char, KeyState>,
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::qwerty()
    }
}

impl Keyboard {
    /// Full a-z keyboard in QWERTY layout
    #[must_use]
    pub fn qwerty() -> Self {
        Self::with_keys(LAYOUT.iter().flat_map(|row| row.chars()))
    }

    /// Keyboard with exactly the given letter keys
    pub fn with_keys(letters: impl IntoIterator<Item = char>) -> Self {
        Self {
            keys: letters
                .into_iter()
                .map(|ch| (ch.to_ascii_lowercase(), KeyState::Unused))
                .collect(),
        }
    }

    /// Current colour of `letter`, or `None` if there is no such key
    #[must_use]
    pub fn state(&self, letter: char) -> Option<KeyState> {
        self.keys.get(&letter).copied()
    }

    /// Recolour the key for a revealed letter
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKeyMapping`] if the keyboard has no key
    /// for `letter`.
    pub fn apply(&mut self, letter: char, verdict: Verdict) -> Result<(), ConfigError> {
        let key = self
            .keys
            .get_mut(&letter)
            .ok_or(ConfigError::MissingKeyMapping { letter })?;
        *key = verdict.into();
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
