//! One game from start to finish
//!
//! A [`Session`] owns every piece of game state: the board, the on-screen
//! keyboard, notices, pending effects and the turn controller. Front-ends
//! feed it input events and completion signals and read state back for
//! rendering; nothing outside it mutates the game.

use super::board::Board;
use super::controller::{GamePhase, TurnController};
use super::effects::{Effect, stagger_offsets};
use super::keyboard::Keyboard;
use super::notifier::{Lifetime, NoticeId, NoticeStyle, Notifier};
use crate::config::GameConfig;
use crate::core::{WORD_LENGTH, Word};
use crate::error::{ConfigError, GuessError};
use crate::wordlists::{Dictionary, resolve_target_word};
use chrono::NaiveDateTime;
use std::collections::VecDeque;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// A discrete input command from the input surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Enter,
    Delete,
}

/// What happened to an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Input is suspended, or the event had nothing to act on
    Ignored,
    /// The active row changed
    Updated,
    /// The guess was refused; the board is unchanged
    Rejected(GuessError),
    /// The guess was accepted and its tiles are being revealed
    RevealStarted,
}

/// State of a single game
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    controller: TurnController,
    board: Board,
    keyboard: Keyboard,
    notifier: Notifier,
    effects: VecDeque<Effect>,
    dictionary: Dictionary,
    target: Option<Word>,
}

impl Session {
    /// Start a game for `target`
    #[must_use]
    pub fn new(config: GameConfig, target: Word, dictionary: Dictionary) -> Self {
        info!(rows = config.rows, scoring = %config.scoring, "Starting session");
        let mut session = Self::empty(config, dictionary);
        session.target = Some(target);
        if session.dictionary.is_empty() {
            session.fail(ConfigError::MissingCollaborator { name: "dictionary" });
        }
        session
    }

    /// A session that shows `error` and never accepts input
    #[must_use]
    pub fn halted(config: GameConfig, error: ConfigError) -> Self {
        let mut session = Self::empty(config, Dictionary::default());
        session.fail(error);
        session
    }

    /// Start the game for the calendar day of `now`
    ///
    /// A day outside the answer list yields a halted session.
    #[must_use]
    pub fn for_date(
        config: GameConfig,
        now: NaiveDateTime,
        answers: &[Word],
        dictionary: Dictionary,
    ) -> Self {
        match resolve_target_word(now, config.epoch, answers) {
            Ok(target) => {
                let target = target.clone();
                Self::new(config, target, dictionary)
            }
            Err(err) => Self::halted(config, err),
        }
    }

    /// Replace the on-screen keyboard
    #[must_use]
    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = keyboard;
        self
    }

    fn empty(config: GameConfig, dictionary: Dictionary) -> Self {
        Self {
            board: Board::new(config.rows),
            config,
            controller: TurnController::new(),
            keyboard: Keyboard::qwerty(),
            notifier: Notifier::new(),
            effects: VecDeque::new(),
            dictionary,
            target: None,
        }
    }

    /// Route one input event through the input gate
    pub fn handle_input(&mut self, event: InputEvent) -> Response {
        if !self.controller.accepts_input() {
            debug!(?event, phase = ?self.phase(), "Input suspended");
            return Response::Ignored;
        }

        match event {
            InputEvent::Letter(ch) => self.board.enter_letter(ch).into(),
            InputEvent::Delete => self.board.delete_last_letter().into(),
            InputEvent::Enter => self.submit(),
        }
    }

    /// Type every letter of `word`, then submit it
    pub fn guess(&mut self, word: &str) -> Response {
        for ch in word.chars() {
            self.handle_input(InputEvent::Letter(ch));
        }
        self.handle_input(InputEvent::Enter)
    }

    #[instrument(skip(self))]
    fn submit(&mut self) -> Response {
        let Some(row) = self.board.active_row_index() else {
            return Response::Ignored;
        };
        let Some(target) = self.target.clone() else {
            self.fail(ConfigError::MissingCollaborator { name: "target word" });
            return Response::Ignored;
        };

        let letters = self.board.active_word();
        let guess = match self.controller.validate(&letters, &self.dictionary) {
            Ok(guess) => guess,
            Err(err) => {
                debug!(%err, letters, "Guess rejected");
                self.notify(err.to_string(), NoticeStyle::Error);
                self.effects.push_back(Effect::Shake { row });
                return Response::Rejected(err);
            }
        };

        // Verdicts for the whole row are fixed before any tile turns over
        let feedback = self.config.scoring.score(&guess, &target);
        if !self.controller.begin_reveal(row, guess, feedback, &target) {
            return Response::Ignored;
        }

        let offsets = stagger_offsets(WORD_LENGTH, self.config.flip_stagger());
        for (col, delay) in offsets.into_iter().enumerate() {
            self.effects.push_back(Effect::Flip { row, col, delay });
        }
        Response::RevealStarted
    }

    /// The renderer finished flipping the next tile of the reveal
    ///
    /// Applies that tile's verdict to the board and keyboard. After the last
    /// tile the turn is decided. Signals with no reveal in flight are
    /// ignored.
    pub fn tile_revealed(&mut self) -> GamePhase {
        let Some(step) = self.controller.next_tile() else {
            return self.phase();
        };

        if !self.board.reveal_tile(step.col, step.verdict) {
            warn!(row = step.row, col = step.col, "Board refused revealed tile");
        }
        if let Err(err) = self.keyboard.apply(step.letter, step.verdict) {
            self.fail(err);
            return self.phase();
        }

        if step.last {
            let phase = self.controller.finish_reveal(self.board.has_empty_tile());
            match phase {
                GamePhase::Won => self.celebrate(step.row),
                GamePhase::Lost => self.disclose_target(),
                GamePhase::AwaitingInput | GamePhase::Revealing => {}
            }
        }
        self.phase()
    }

    /// Deliver every outstanding tile signal at once
    ///
    /// For front-ends without animation.
    pub fn reveal_all(&mut self) -> GamePhase {
        while self.controller.revealing_guess().is_some() {
            self.tile_revealed();
        }
        self.phase()
    }

    /// Start fading notices whose time is up
    pub fn expire_notices(&mut self, now: Instant) -> Vec<NoticeId> {
        self.notifier.expire(now)
    }

    /// The renderer finished fading out a notice
    pub fn notice_faded(&mut self, id: NoticeId) -> bool {
        self.notifier.fade_complete(id)
    }

    /// Dismiss a notice early
    pub fn clear_notice(&mut self, id: NoticeId) -> bool {
        self.notifier.clear(id)
    }

    fn celebrate(&mut self, row: usize) {
        self.notifier.show(
            "You Win",
            NoticeStyle::Success,
            Lifetime::Transient(self.config.win_notice_duration),
        );
        let offsets = stagger_offsets(WORD_LENGTH, self.config.dance_stagger());
        for (col, delay) in offsets.into_iter().enumerate() {
            self.effects.push_back(Effect::Dance { row, col, delay });
        }
    }

    fn disclose_target(&mut self) {
        if let Some(target) = &self.target {
            self.notifier.show(
                target.text().to_uppercase(),
                NoticeStyle::Info,
                Lifetime::Persistent,
            );
        }
    }

    fn notify(&mut self, text: String, style: NoticeStyle) {
        self.notifier.show(
            text,
            style,
            Lifetime::Transient(self.config.notice_duration),
        );
    }

    fn fail(&mut self, err: ConfigError) {
        self.notifier
            .show(err.to_string(), NoticeStyle::Error, Lifetime::Persistent);
        self.controller.fail(err);
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.controller.phase()
    }

    #[must_use]
    pub const fn accepts_input(&self) -> bool {
        self.controller.accepts_input()
    }

    /// The error that halted this session, if any
    #[must_use]
    pub const fn fatal_error(&self) -> Option<&ConfigError> {
        self.controller.fatal_error()
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[must_use]
    pub const fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The target word, once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        if self.phase().is_terminal() {
            self.target.as_ref()
        } else {
            None
        }
    }

    /// Take every effect emitted since the last call, oldest first
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        self.effects.drain(..).collect()
    }

    /// Emoji grid of the committed rows, as shared after a game
    #[must_use]
    pub fn share_text(&self) -> String {
        let guesses = self.board.committed_rows().count();
        let score = match self.phase() {
            GamePhase::Won => guesses.to_string(),
            _ => "X".to_string(),
        };
        let grid: Vec<String> = self
            .board
            .committed_rows()
            .filter_map(|row| row.feedback().map(|f| f.to_emoji()))
            .collect();

        format!("{score}/{}\n{}", self.config.rows, grid.join("\n"))
    }
}

impl From<bool> for Response {
    fn from(changed: bool) -> Self {
        if changed { Self::Updated } else { Self::Ignored }
    }
}
