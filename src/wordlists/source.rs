//! Daily target selection
//!
//! The target word for a day is the entry of the answer sequence at the
//! number of whole calendar days elapsed since a fixed epoch. The same
//! calendar day always resolves to the same word, whatever the time of day.

use crate::core::Word;
use crate::error::ConfigError;
use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, instrument};

/// Day zero of the answer sequence
pub const DEFAULT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2022, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch"),
};

/// Whole days elapsed between local midnight of `epoch` and `now`
///
/// Fractional days are floored, so any time before the epoch yields a
/// negative offset.
#[must_use]
pub fn day_offset(now: NaiveDateTime, epoch: NaiveDate) -> i64 {
    let elapsed = now.signed_duration_since(epoch.and_time(chrono::NaiveTime::MIN));
    elapsed.num_seconds().div_euclid(86_400)
}

/// Resolve the target word for `now`
///
/// # Errors
///
/// Returns [`ConfigError::IndexOutOfRange`] when the day offset falls outside
/// `words`, including days before the epoch. Callers treat this as fatal.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use daily_wordle::wordlists::loader::words_from_slice;
/// use daily_wordle::wordlists::source::resolve_target_word;
///
/// let words = words_from_slice(&["crane", "slate", "irate"]);
/// let epoch = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
/// let now = NaiveDate::from_ymd_opt(2022, 1, 2).unwrap().and_hms_opt(23, 59, 0).unwrap();
///
/// assert_eq!(resolve_target_word(now, epoch, &words).unwrap().text(), "slate");
/// ```
#[instrument(skip(words), fields(available = words.len()))]
pub fn resolve_target_word(
    now: NaiveDateTime,
    epoch: NaiveDate,
    words: &[Word],
) -> Result<&Word, ConfigError> {
    let offset = day_offset(now, epoch);
    let word = usize::try_from(offset)
        .ok()
        .and_then(|index| words.get(index))
        .ok_or(ConfigError::IndexOutOfRange {
            offset,
            available: words.len(),
        })?;

    debug!(offset, "Resolved daily target");
    Ok(word)
}
