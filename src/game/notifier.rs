//! Transient and persistent user-facing messages
//!
//! Notices stack with the most recent first. Dismissal happens in two steps:
//! an expired or cleared notice starts fading, and it is removed when the
//! renderer reports the fade finished.

use std::time::{Duration, Instant};

/// Identifier handed out by [`Notifier::show`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    Info,
    Success,
    Error,
}

/// How long a notice stays up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// Starts fading once the duration has elapsed
    Transient(Duration),
    /// Stays until cleared
    Persistent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub text: String,
    pub style: NoticeStyle,
    pub lifetime: Lifetime,
    pub shown_at: Instant,
    pub fading: bool,
}

impl Notice {
    fn is_expired(&self, now: Instant) -> bool {
        match self.lifetime {
            Lifetime::Transient(duration) => {
                now.saturating_duration_since(self.shown_at) >= duration
            }
            Lifetime::Persistent => false,
        }
    }
}

/// Stack of visible notices
#[derive(Debug, Default)]
pub struct Notifier {
    notices: Vec<Notice>,
    next_id: u64,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notice starting now
    pub fn show(
        &mut self,
        text: impl Into<String>,
        style: NoticeStyle,
        lifetime: Lifetime,
    ) -> NoticeId {
        self.show_at(text, style, lifetime, Instant::now())
    }

    /// Show a notice with an explicit start time
    pub fn show_at(
        &mut self,
        text: impl Into<String>,
        style: NoticeStyle,
        lifetime: Lifetime,
        now: Instant,
    ) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        self.notices.insert(
            0,
            Notice {
                id,
                text: text.into(),
                style,
                lifetime,
                shown_at: now,
                fading: false,
            },
        );
        id
    }

    /// Start fading every transient notice whose time is up
    ///
    /// Returns the notices that began fading on this call.
    pub fn expire(&mut self, now: Instant) -> Vec<NoticeId> {
        self.notices
            .iter_mut()
            .filter(|n| !n.fading && n.is_expired(now))
            .map(|n| {
                n.fading = true;
                n.id
            })
            .collect()
    }

    /// Start fading a notice regardless of its lifetime
    ///
    /// Returns false if the notice is unknown or already fading.
    pub fn clear(&mut self, id: NoticeId) -> bool {
        match self.notices.iter_mut().find(|n| n.id == id && !n.fading) {
            Some(notice) => {
                notice.fading = true;
                true
            }
            None => false,
        }
    }

    /// Remove a notice whose fade has finished
    ///
    /// Returns false if the notice is unknown or was not fading.
    pub fn fade_complete(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| !(n.id == id && n.fading));
        self.notices.len() != before
    }

    /// Visible notices, most recent first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notice> {
        self.notices.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn notices_stack_most_recent_first() {
        let mut notifier = Notifier::new();
        let now = Instant::now();
        notifier.show_at("first", NoticeStyle::Info, Lifetime::Persistent, now);
        notifier.show_at("second", NoticeStyle::Error, Lifetime::Persistent, now);

        let texts: Vec<&str> = notifier.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["second", "first"]);
        assert_eq!(notifier.latest().unwrap().text, "second");
    }

    #[test]
    fn transient_notice_fades_then_disappears() {
        let mut notifier = Notifier::new();
        let now = Instant::now();
        let id = notifier.show_at(
            "Not enough letters!",
            NoticeStyle::Error,
            Lifetime::Transient(SECOND),
            now,
        );

        assert!(notifier.expire(now + SECOND / 2).is_empty());
        assert_eq!(notifier.expire(now + SECOND), vec![id]);
        // Still visible while fading
        assert_eq!(notifier.len(), 1);
        assert!(notifier.latest().unwrap().fading);
        // Not reported twice
        assert!(notifier.expire(now + 2 * SECOND).is_empty());

        assert!(notifier.fade_complete(id));
        assert!(notifier.is_empty());
    }

    #[test]
    fn persistent_notice_never_expires() {
        let mut notifier = Notifier::new();
        let now = Instant::now();
        let id = notifier.show_at("CRANE", NoticeStyle::Info, Lifetime::Persistent, now);

        assert!(notifier.expire(now + 3600 * SECOND).is_empty());
        assert!(!notifier.fade_complete(id));

        assert!(notifier.clear(id));
        assert!(notifier.fade_complete(id));
        assert!(notifier.is_empty());
    }

    #[test]
    fn dismissing_one_leaves_others() {
        let mut notifier = Notifier::new();
        let now = Instant::now();
        let keep = notifier.show_at("keep", NoticeStyle::Info, Lifetime::Persistent, now);
        let short =
            notifier.show_at("short", NoticeStyle::Error, Lifetime::Transient(SECOND), now);

        notifier.expire(now + SECOND);
        notifier.fade_complete(short);

        assert_eq!(notifier.len(), 1);
        assert_eq!(notifier.latest().unwrap().id, keep);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut notifier = Notifier::new();
        assert!(!notifier.clear(NoticeId(42)));
        assert!(!notifier.fade_complete(NoticeId(42)));
    }
}
