//! Frame-driven playback of session effects
//!
//! The animator turns [`Effect`]s and notice fades into timed animations and
//! reports completions as [`Signal`]s. Time only moves through [`tick`], so a
//! test can step it exactly.
//!
//! Flip completions are reported in the order the flips end, which is the
//! order they were scheduled since every flip lasts equally long.
//!
//! [`tick`]: Animator::tick

use crate::config::GameConfig;
use crate::game::{Effect, NoticeId};
use std::time::Duration;

/// How long a notice takes to fade out
pub const FADE_DURATION: Duration = Duration::from_millis(250);

/// How long a rejected row shakes
pub const SHAKE_DURATION: Duration = Duration::from_millis(300);

/// A completion the session needs to hear about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// One tile finished flipping
    TileFlipped,
    /// A notice finished fading out
    NoticeFaded(NoticeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Flip { row: usize, col: usize },
    Shake { row: usize },
    Dance { row: usize, col: usize },
    Fade { id: NoticeId },
}

#[derive(Debug, Clone, Copy)]
struct Track {
    kind: Kind,
    start: Duration,
    end: Duration,
}

impl Track {
    fn progress(&self, clock: Duration) -> Option<f32> {
        if clock < self.start {
            return None;
        }
        let span = self.end.saturating_sub(self.start);
        if span.is_zero() {
            return Some(1.0);
        }
        Some(((clock - self.start).as_secs_f32() / span.as_secs_f32()).min(1.0))
    }
}

/// Running animations and the clock they are measured against
#[derive(Debug)]
pub struct Animator {
    clock: Duration,
    tracks: Vec<Track>,
    flip: Duration,
    dance: Duration,
}

impl Animator {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            clock: Duration::ZERO,
            tracks: Vec::new(),
            flip: config.flip_duration,
            dance: config.dance_duration,
        }
    }

    /// Start playing `effect` from the current clock
    pub fn play(&mut self, effect: Effect) {
        let (kind, delay, length) = match effect {
            Effect::Flip { row, col, delay } => (Kind::Flip { row, col }, delay, self.flip),
            Effect::Dance { row, col, delay } => (Kind::Dance { row, col }, delay, self.dance),
            Effect::Shake { row } => (Kind::Shake { row }, Duration::ZERO, SHAKE_DURATION),
        };
        self.push(kind, delay, length);
    }

    /// Start fading a notice out
    pub fn fade(&mut self, id: NoticeId) {
        self.push(Kind::Fade { id }, Duration::ZERO, FADE_DURATION);
    }

    fn push(&mut self, kind: Kind, delay: Duration, length: Duration) {
        let start = self.clock + delay;
        self.tracks.push(Track {
            kind,
            start,
            end: start + length,
        });
    }

    /// Advance the clock by `elapsed` and collect finished animations
    pub fn tick(&mut self, elapsed: Duration) -> Vec<Signal> {
        self.clock += elapsed;
        let clock = self.clock;

        let (mut done, running): (Vec<Track>, Vec<Track>) =
            self.tracks.drain(..).partition(|t| t.end <= clock);
        self.tracks = running;
        // Stable, so equal end times keep scheduling order
        done.sort_by_key(|t| t.end);

        done.into_iter()
            .filter_map(|t| match t.kind {
                Kind::Flip { .. } => Some(Signal::TileFlipped),
                Kind::Fade { id } => Some(Signal::NoticeFaded(id)),
                Kind::Shake { .. } | Kind::Dance { .. } => None,
            })
            .collect()
    }

    /// Whether nothing is playing or waiting to play
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Progress of the flip on a tile, if one is playing
    #[must_use]
    pub fn flip_progress(&self, row: usize, col: usize) -> Option<f32> {
        self.progress_of(Kind::Flip { row, col })
    }

    /// Whether a tile has a flip scheduled that has not finished
    #[must_use]
    pub fn flip_pending(&self, row: usize, col: usize) -> bool {
        self.tracks
            .iter()
            .any(|t| t.kind == Kind::Flip { row, col })
    }

    /// Progress of the bounce on a tile of the winning row, if one is playing
    #[must_use]
    pub fn dance_progress(&self, row: usize, col: usize) -> Option<f32> {
        self.progress_of(Kind::Dance { row, col })
    }

    /// Horizontal offset, in cells, of a shaking row
    #[must_use]
    pub fn shake_offset(&self, row: usize) -> i16 {
        match self.progress_of(Kind::Shake { row }) {
            // Two full swings left and right
            Some(p) if p < 1.0 => match ((p * 8.0) as u32) % 4 {
                0 => 1,
                2 => -1,
                _ => 0,
            },
            _ => 0,
        }
    }

    /// Whether a notice is fading out
    #[must_use]
    pub fn is_fading(&self, id: NoticeId) -> bool {
        self.tracks.iter().any(|t| t.kind == Kind::Fade { id })
    }

    fn progress_of(&self, kind: Kind) -> Option<f32> {
        self.tracks
            .iter()
            .find(|t| t.kind == kind)
            .and_then(|t| t.progress(self.clock))
    }
}
