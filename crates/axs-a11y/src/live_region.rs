//! Live Region Announcements
//!
//! Queue of screen-reader announcements with assertive priority.
//! Widgets push announcements; presentation is a collaborator concern
//! and nothing here touches the document.

use std::collections::VecDeque;

/// Politeness level of an announcement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Politeness {
    Polite,
    Assertive,
}

/// A pending screen-reader announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub politeness: Politeness,
}

/// Announcement queue
#[derive(Debug, Default)]
pub struct Announcer {
    pending: VecDeque<Announcement>,
}

impl Announcer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn announce(&mut self, text: impl Into<String>, politeness: Politeness) {
        let text = text.into();
        tracing::debug!("announce ({politeness:?}): {text}");
        self.pending.push_back(Announcement { text, politeness });
    }

    pub fn announce_polite(&mut self, text: impl Into<String>) {
        self.announce(text, Politeness::Polite);
    }

    pub fn announce_assertive(&mut self, text: impl Into<String>) {
        self.announce(text, Politeness::Assertive);
    }

    /// Next announcement; assertive entries drain before polite ones
    pub fn next_announcement(&mut self) -> Option<Announcement> {
        if let Some(pos) = self
            .pending
            .iter()
            .position(|a| a.politeness == Politeness::Assertive)
        {
            return self.pending.remove(pos);
        }
        self.pending.pop_front()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Drain everything in announcement order
    pub fn drain(&mut self) -> Vec<Announcement> {
        let mut out = Vec::with_capacity(self.pending.len());
        while let Some(a) = self.next_announcement() {
            out.push(a);
        }
        out
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_within_politeness() {
        let mut announcer = Announcer::new();
        announcer.announce_polite("first");
        announcer.announce_polite("second");

        assert_eq!(announcer.next_announcement().unwrap().text, "first");
        assert_eq!(announcer.next_announcement().unwrap().text, "second");
        assert!(!announcer.has_pending());
    }

    #[test]
    fn test_assertive_priority() {
        let mut announcer = Announcer::new();
        announcer.announce_polite("Searching for shoes. Please wait for results.");
        announcer.announce_assertive("Wireless Headphones has been added to your cart");

        let first = announcer.next_announcement().unwrap();
        assert_eq!(first.politeness, Politeness::Assertive);
        let second = announcer.next_announcement().unwrap();
        assert_eq!(second.politeness, Politeness::Polite);
    }

    #[test]
    fn test_drain_order() {
        let mut announcer = Announcer::new();
        announcer.announce_polite("a");
        announcer.announce_assertive("b");
        announcer.announce_polite("c");

        let texts: Vec<_> = announcer.drain().into_iter().map(|a| a.text).collect();
        assert_eq!(texts, vec!["b", "a", "c"]);
    }
}
