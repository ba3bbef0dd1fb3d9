//! Which puzzle is up on a given day

use crate::wordlists::day_offset;
use chrono::{NaiveDate, NaiveDateTime};

/// Puzzle details for one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayInfo {
    pub date: NaiveDate,
    pub epoch: NaiveDate,
    /// Whole days since the epoch
    pub offset: i64,
    /// Number of daily words available
    pub available: usize,
}

impl TodayInfo {
    /// Whether the answer list has a word for this day
    #[must_use]
    pub fn has_puzzle(&self) -> bool {
        usize::try_from(self.offset).is_ok_and(|i| i < self.available)
    }

    /// Days left before the answer list runs out, counting this one
    #[must_use]
    pub fn days_remaining(&self) -> usize {
        usize::try_from(self.offset).map_or(0, |i| self.available.saturating_sub(i))
    }
}

#[must_use]
pub fn today_info(now: NaiveDateTime, epoch: NaiveDate, available: usize) -> TodayInfo {
    TodayInfo {
        date: now.date(),
        epoch,
        offset: day_offset(now, epoch),
        available,
    }
}
