//! Guess dictionary

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Read-only set of words accepted as guesses
///
/// Lookups expect lowercase input, which is what the board produces.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        Self {
            words: words.into_iter().map(|w| w.text().to_string()).collect(),
        }
    }

    /// Check whether `word` is an accepted guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = &'a Word>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn contains_listed_words_only() {
        let words = words_from_slice(&["crane", "slate"]);
        let dictionary = Dictionary::from_words(&words);

        assert!(dictionary.contains("crane"));
        assert!(dictionary.contains("slate"));
        assert!(!dictionary.contains("crate"));
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn duplicates_collapse() {
        let words = words_from_slice(&["crane", "CRANE", "crane"]);
        let dictionary: Dictionary = words.iter().collect();
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::default();
        assert!(dictionary.is_empty());
        assert!(!dictionary.contains("crane"));
    }
}
