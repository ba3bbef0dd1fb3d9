//! Guess board: the grid of letter tiles
//!
//! Rows are filled front to back. The active row is the one the cursor points
//! at; its filled tiles are always a contiguous prefix, so letter entry and
//! deletion work on `filled` alone. A row is committed once every tile holds
//! a verdict, and the cursor then moves to the next row.

use crate::core::{Feedback, Verdict, WORD_LENGTH};

/// Display and scoring state of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    #[default]
    Empty,
    /// Holds a letter that has not been scored yet
    Active,
    Correct,
    WrongLocation,
    Wrong,
}

impl From<Verdict> for TileState {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct => Self::Correct,
            Verdict::WrongLocation => Self::WrongLocation,
            Verdict::Wrong => Self::Wrong,
        }
    }
}

impl TileState {
    /// Whether a verdict has been applied
    #[must_use]
    pub const fn is_scored(self) -> bool {
        matches!(self, Self::Correct | Self::WrongLocation | Self::Wrong)
    }
}

/// One letter cell of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub position: usize,
    pub letter: Option<char>,
    pub state: TileState,
}

impl Tile {
    const fn empty(position: usize) -> Self {
        Self {
            position,
            letter: None,
            state: TileState::Empty,
        }
    }
}

/// One guess attempt: exactly [`WORD_LENGTH`] tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    tiles: [Tile; WORD_LENGTH],
}

impl Row {
    fn new() -> Self {
        Self {
            tiles: std::array::from_fn(Tile::empty),
        }
    }

    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.tiles
    }

    /// Every tile carries a verdict
    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.tiles.iter().all(|t| t.state.is_scored())
    }

    /// Letters entered so far, in order
    #[must_use]
    pub fn word(&self) -> String {
        self.tiles.iter().filter_map(|t| t.letter).collect()
    }

    /// Verdicts of a committed row
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        let mut verdicts = [Verdict::Wrong; WORD_LENGTH];
        for (verdict, tile) in verdicts.iter_mut().zip(&self.tiles) {
            *verdict = match tile.state {
                TileState::Correct => Verdict::Correct,
                TileState::WrongLocation => Verdict::WrongLocation,
                TileState::Wrong => Verdict::Wrong,
                TileState::Empty | TileState::Active => return None,
            };
        }
        Some(Feedback::new(verdicts))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Cursor {
    row: usize,
    filled: usize,
}

/// The full grid of guess rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Row>,
    cursor: Cursor,
}

impl Board {
    /// Create an empty board with `rows` guess rows
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| Row::new()).collect(),
            cursor: Cursor::default(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Index of the row accepting letters, or `None` once every row is used
    #[must_use]
    pub fn active_row_index(&self) -> Option<usize> {
        (self.cursor.row < self.rows.len()).then_some(self.cursor.row)
    }

    /// Tiles holding unscored letters, in entry order
    #[must_use]
    pub fn active_tiles(&self) -> &[Tile] {
        match self.rows.get(self.cursor.row) {
            Some(row) => &row.tiles[..self.cursor.filled],
            None => &[],
        }
    }

    /// The letters of the active row concatenated
    #[must_use]
    pub fn active_word(&self) -> String {
        self.active_tiles().iter().filter_map(|t| t.letter).collect()
    }

    /// Put `ch` in the first empty tile of the active row
    ///
    /// Ignored when the row is already full, when no row is left, or when
    /// `ch` is not an ASCII letter. Returns whether a tile changed.
    pub fn enter_letter(&mut self, ch: char) -> bool {
        if !ch.is_ascii_alphabetic() || self.cursor.filled >= WORD_LENGTH {
            return false;
        }
        let Some(row) = self.rows.get_mut(self.cursor.row) else {
            return false;
        };

        let tile = &mut row.tiles[self.cursor.filled];
        tile.letter = Some(ch.to_ascii_lowercase());
        tile.state = TileState::Active;
        self.cursor.filled += 1;
        true
    }

    /// Clear the most recently entered letter of the active row
    ///
    /// Returns whether a tile changed.
    pub fn delete_last_letter(&mut self) -> bool {
        if self.cursor.filled == 0 {
            return false;
        }
        let Some(row) = self.rows.get_mut(self.cursor.row) else {
            return false;
        };

        self.cursor.filled -= 1;
        row.tiles[self.cursor.filled] = Tile::empty(self.cursor.filled);
        true
    }

    /// Apply a verdict to one tile of the full active row
    ///
    /// Once the last unscored tile receives its verdict the row is committed
    /// and the next row becomes active. Returns false if the tile is not an
    /// unscored letter of a full active row.
    pub fn reveal_tile(&mut self, col: usize, verdict: Verdict) -> bool {
        if self.cursor.filled != WORD_LENGTH {
            return false;
        }
        let Some(row) = self.rows.get_mut(self.cursor.row) else {
            return false;
        };
        let Some(tile) = row.tiles.get_mut(col) else {
            return false;
        };
        if tile.state != TileState::Active {
            return false;
        }

        tile.state = verdict.into();
        if row.is_committed() {
            self.cursor = Cursor {
                row: self.cursor.row + 1,
                filled: 0,
            };
        }
        true
    }

    /// Apply a whole row of verdicts at once
    ///
    /// Returns false, leaving the board unchanged, if the active row is not
    /// full of unscored letters.
    pub fn commit_row(&mut self, feedback: &Feedback) -> bool {
        let ready = self.cursor.filled == WORD_LENGTH
            && self.active_tiles().iter().all(|t| t.state == TileState::Active);
        if !ready {
            return false;
        }
        for (col, &verdict) in feedback.verdicts().iter().enumerate() {
            self.reveal_tile(col, verdict);
        }
        true
    }

    /// Whether any tile on the board is still without a letter
    #[must_use]
    pub fn has_empty_tile(&self) -> bool {
        self.rows
            .iter()
            .flat_map(|row| row.tiles.iter())
            .any(|t| t.letter.is_none())
    }

    /// Rows that have been scored, in order
    pub fn committed_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().take_while(|row| row.is_committed())
    }
}
