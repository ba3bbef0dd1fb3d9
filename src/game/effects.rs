//! Presentation cues emitted by the session for the renderer
//!
//! The session never waits on these directly; the renderer plays them and
//! reports completion through the session's completion signals.

use std::time::Duration;

/// A named animation the renderer should play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Rejected guess: shake the active row
    Shake { row: usize },
    /// Flip one tile to show its verdict, starting after `delay`
    Flip { row: usize, col: usize, delay: Duration },
    /// Winning row: bounce one tile, starting after `delay`
    Dance { row: usize, col: usize, delay: Duration },
}

/// Start offsets for `count` items spaced `delay` apart
///
/// The first item starts immediately, item `i` at `i * delay`.
#[must_use]
pub fn stagger_offsets(count: usize, delay: Duration) -> Vec<Duration> {
    (0..count)
        .map(|i| delay.saturating_mul(u32::try_from(i).unwrap_or(u32::MAX)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_offsets_are_linear() {
        let offsets = stagger_offsets(5, Duration::from_millis(250));
        assert_eq!(
            offsets,
            [0, 250, 500, 750, 1000].map(Duration::from_millis)
        );
    }

    #[test]
    fn stagger_offsets_edge_cases() {
        assert!(stagger_offsets(0, Duration::from_millis(10)).is_empty());
        assert_eq!(stagger_offsets(1, Duration::from_millis(10)), [Duration::ZERO]);
        assert!(stagger_offsets(3, Duration::ZERO).iter().all(Duration::is_zero));
    }
}
