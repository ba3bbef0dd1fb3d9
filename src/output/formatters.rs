//! Formatting utilities for terminal output

use crate::game::{KeyState, NoticeStyle, Tile, TileState};
use colored::{ColoredString, Colorize};

/// Three-column label for a tile: the letter, or `_` when empty
#[must_use]
pub fn tile_label(tile: &Tile) -> String {
    let letter = tile.letter.map_or('_', |c| c.to_ascii_uppercase());
    format!(" {letter} ")
}

/// A tile coloured by its state
#[must_use]
pub fn format_tile(tile: &Tile) -> ColoredString {
    let label = tile_label(tile);
    match tile.state {
        TileState::Empty => label.bright_black(),
        TileState::Active => label.bright_white().bold(),
        TileState::Correct => label.black().on_green().bold(),
        TileState::WrongLocation => label.black().on_yellow().bold(),
        TileState::Wrong => label.white().on_bright_black().bold(),
    }
}

/// A keyboard key coloured by what has been revealed about its letter
#[must_use]
pub fn format_key(letter: char, state: KeyState) -> ColoredString {
    let label = letter.to_ascii_uppercase().to_string();
    match state {
        KeyState::Unused => label.white(),
        KeyState::Correct => label.black().on_green(),
        KeyState::WrongLocation => label.black().on_yellow(),
        KeyState::Wrong => label.bright_black(),
    }
}

#[must_use]
pub fn format_notice(text: &str, style: NoticeStyle) -> ColoredString {
    match style {
        NoticeStyle::Info => text.bright_white().bold(),
        NoticeStyle::Success => text.green().bold(),
        NoticeStyle::Error => text.red().bold(),
    }
}

/// Left padding that centres a key row of `len` keys under the board
#[must_use]
pub fn key_row_indent(len: usize, widest: usize) -> String {
    " ".repeat(widest.saturating_sub(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(letter: Option<char>, state: TileState) -> Tile {
        Tile {
            position: 0,
            letter,
            state,
        }
    }

    #[test]
    fn tile_label_uppercases_letter() {
        assert_eq!(tile_label(&tile(Some('c'), TileState::Correct)), " C ");
    }

    #[test]
    fn tile_label_empty() {
        assert_eq!(tile_label(&tile(None, TileState::Empty)), " _ ");
    }

    #[test]
    fn key_row_indent_centres_shorter_rows() {
        assert_eq!(key_row_indent(7, 10), "   ");
        assert_eq!(key_row_indent(10, 10), "");
        assert_eq!(key_row_indent(12, 10), "");
    }
}
