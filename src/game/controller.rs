//! Turn controller: the guess/reveal state machine
//!
//! ```text
//! AwaitingInput --submit ok--> Revealing --last tile--> AwaitingInput
//!       ^    |                                      \-> Won  (terminal)
//!       |    +--incomplete / unknown word (no change)\-> Lost (terminal)
//! ```
//!
//! Validation happens inside the submit call and is never observable as a
//! phase. While revealing, the input gate is closed; it reopens after the
//! last tile and before the win/lose decision, which then locks it again for
//! terminal outcomes. A fatal configuration error locks the gate for good.

use crate::core::{Feedback, Verdict, WORD_LENGTH, Word};
use crate::error::{ConfigError, GuessError};
use crate::wordlists::Dictionary;
use tracing::{debug, error, info, instrument};

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    AwaitingInput,
    Revealing,
    Won,
    Lost,
}

impl GamePhase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The single on/off switch for every kind of input
///
/// A locked gate stays closed whatever `resume` is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputGate {
    open: bool,
    locked: bool,
}

impl Default for InputGate {
    fn default() -> Self {
        Self {
            open: true,
            locked: false,
        }
    }
}

impl InputGate {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open && !self.locked
    }

    #[must_use]
    pub const fn is_locked(self) -> bool {
        self.locked
    }

    fn suspend(&mut self) {
        self.open = false;
    }

    fn resume(&mut self) {
        self.open = true;
    }

    fn lock(&mut self) {
        self.open = false;
        self.locked = true;
    }
}

/// One tile of an in-flight reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileReveal {
    pub row: usize,
    pub col: usize,
    pub letter: char,
    pub verdict: Verdict,
    /// This is the last tile of the row
    pub last: bool,
}

/// Scored guess whose tiles are being revealed
#[derive(Debug, Clone)]
struct Reveal {
    row: usize,
    guess: Word,
    feedback: Feedback,
    solves: bool,
    next_col: usize,
}

/// Drives one game from first letter to win or loss
#[derive(Debug, Clone, Default)]
pub struct TurnController {
    phase: GamePhase,
    gate: InputGate,
    reveal: Option<Reveal>,
    fatal: Option<ConfigError>,
}

impl TurnController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub const fn gate(&self) -> InputGate {
        self.gate
    }

    /// Whether input events should be acted on
    #[must_use]
    pub const fn accepts_input(&self) -> bool {
        self.gate.is_open()
    }

    /// The error that halted the session, if any
    #[must_use]
    pub const fn fatal_error(&self) -> Option<&ConfigError> {
        self.fatal.as_ref()
    }

    /// Guess currently being revealed
    #[must_use]
    pub fn revealing_guess(&self) -> Option<&Word> {
        self.reveal.as_ref().map(|r| &r.guess)
    }

    /// Check a submitted row before scoring
    ///
    /// Pure: the phase is unchanged whatever the outcome.
    ///
    /// # Errors
    ///
    /// - [`GuessError::IncompleteGuess`] unless exactly [`WORD_LENGTH`]
    ///   letters were entered
    /// - [`GuessError::UnknownWord`] if the dictionary does not list the guess
    pub fn validate(&self, letters: &str, dictionary: &Dictionary) -> Result<Word, GuessError> {
        if letters.chars().count() != WORD_LENGTH {
            return Err(GuessError::IncompleteGuess);
        }
        if !dictionary.contains(letters) {
            return Err(GuessError::UnknownWord);
        }
        Word::new(letters).map_err(|_| GuessError::UnknownWord)
    }

    /// Enter `Revealing` with verdicts computed for the whole guess
    ///
    /// Returns false, changing nothing, unless the controller is awaiting
    /// input with the gate open.
    #[instrument(skip(self, guess, feedback, target), fields(guess = %guess))]
    pub fn begin_reveal(
        &mut self,
        row: usize,
        guess: Word,
        feedback: Feedback,
        target: &Word,
    ) -> bool {
        if self.phase != GamePhase::AwaitingInput || !self.gate.is_open() {
            return false;
        }

        let solves = guess == *target;
        info!(row, feedback = %feedback, "Revealing guess");
        self.gate.suspend();
        self.phase = GamePhase::Revealing;
        self.reveal = Some(Reveal {
            row,
            guess,
            feedback,
            solves,
            next_col: 0,
        });
        true
    }

    /// Take the next tile to reveal, left to right
    ///
    /// Called once per tile completion signal. Returns `None` when no reveal
    /// is in flight or every tile has already been handed out.
    pub fn next_tile(&mut self) -> Option<TileReveal> {
        let Some(reveal) = self.reveal.as_mut() else {
            debug!("Completion signal with no reveal in flight");
            return None;
        };
        if reveal.next_col >= WORD_LENGTH {
            debug!("Completion signal after the last tile");
            return None;
        }

        let col = reveal.next_col;
        reveal.next_col += 1;
        let step = TileReveal {
            row: reveal.row,
            col,
            letter: char::from(reveal.guess.char_at(col)),
            verdict: reveal.feedback.at(col),
            last: col + 1 == WORD_LENGTH,
        };
        debug!(row = step.row, col, verdict = ?step.verdict, "Tile revealed");
        Some(step)
    }

    /// Close out the reveal after its last tile and decide the turn
    ///
    /// Input is resumed first; a win, or a loss when the board has no empty
    /// tile left, then locks it for the rest of the session.
    #[instrument(skip(self))]
    pub fn finish_reveal(&mut self, board_has_empty_tile: bool) -> GamePhase {
        let Some(reveal) = self.reveal.take() else {
            return self.phase;
        };

        self.gate.resume();
        self.phase = if reveal.solves {
            GamePhase::Won
        } else if !board_has_empty_tile {
            GamePhase::Lost
        } else {
            GamePhase::AwaitingInput
        };

        if self.phase.is_terminal() {
            self.gate.lock();
            info!(phase = ?self.phase, guesses = reveal.row + 1, "Game over");
        }
        self.phase
    }

    /// Halt the session on a configuration error
    pub fn fail(&mut self, err: ConfigError) {
        error!(%err, "Session halted");
        self.gate.lock();
        self.reveal = None;
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
    }
}
