//! Word list loading utilities
//!
//! Turns embedded constants or override files into validated [`Word`]s.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file, one per line
///
/// Blank lines are skipped. Lines that are not valid five-letter words are
/// skipped with a warning. Order is preserved, which matters for the daily
/// answer sequence.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use daily_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_lines(&content);
    debug!(path = %path.display(), count = words.len(), "Loaded word list");
    Ok(words)
}

fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(err) => {
                    warn!(line = index + 1, entry = trimmed, %err, "Skipping word list entry");
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use daily_wordle::wordlists::loader::words_from_slice;
/// use daily_wordle::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_lines_keeps_order_and_skips_junk() {
        let words = parse_lines("  Zebra\n\ncrane\nnope\nabc12\nslate\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["zebra", "crane", "slate"]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here.txt");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
