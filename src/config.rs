//! Session configuration
//!
//! Timings mirror the reveal animation: each tile flips for `flip_duration`,
//! and the next tile starts half a flip later.

use crate::core::ScoringRule;
use crate::wordlists::DEFAULT_EPOCH;
use chrono::NaiveDate;
use std::time::Duration;

/// Default number of guesses per game
pub const DEFAULT_ROWS: usize = 6;

/// Configuration for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of guess rows on the board
    pub rows: usize,
    /// Day zero of the answer sequence
    pub epoch: NaiveDate,
    pub scoring: ScoringRule,
    /// Full flip of one tile
    pub flip_duration: Duration,
    /// Full bounce of one tile in the winning dance
    pub dance_duration: Duration,
    /// Lifetime of short messages such as "Not enough letters!"
    pub notice_duration: Duration,
    /// Lifetime of the win message
    pub win_notice_duration: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            epoch: DEFAULT_EPOCH,
            scoring: ScoringRule::Naive,
            flip_duration: Duration::from_millis(500),
            dance_duration: Duration::from_millis(500),
            notice_duration: Duration::from_millis(1000),
            win_notice_duration: Duration::from_millis(5000),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay between the start of consecutive tile flips
    #[must_use]
    pub fn flip_stagger(&self) -> Duration {
        self.flip_duration / 2
    }

    /// Delay between the start of consecutive tile bounces
    #[must_use]
    pub fn dance_stagger(&self) -> Duration {
        self.dance_duration / 5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_game() {
        let config = GameConfig::new();
        assert_eq!(config.rows, 6);
        assert_eq!(config.scoring, ScoringRule::Naive);
        assert_eq!(config.flip_stagger(), Duration::from_millis(250));
        assert_eq!(config.dance_stagger(), Duration::from_millis(100));
    }
}
