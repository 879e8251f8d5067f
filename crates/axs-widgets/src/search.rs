//! Search Box
//!
//! Announces submitted queries and, after a typing pause, the number
//! of characters entered.

use axs_a11y::{A11yError, Announcer};
use axs_dom::{Document, NodeId};

use crate::timer::{TimerAction, TimerId, TimerQueue};

/// Typing pause before the character count is announced
pub const CHAR_COUNT_DEBOUNCE_MS: u64 = 1000;

/// Values this short are not worth announcing
const MIN_ANNOUNCED_LEN: usize = 3;

/// Search form with its input and submit button
#[derive(Debug)]
pub struct Search {
    form: NodeId,
    input: NodeId,
    debounce: Option<TimerId>,
}

impl Search {
    /// Bind a `form[role="search"]`; the search input is required.
    pub fn bind(doc: &Document, form: NodeId) -> Result<Self, A11yError> {
        let input = doc
            .elements_with_tag(form, "input")
            .into_iter()
            .find(|&id| doc.attribute(id, "type") == Some("search"))
            .ok_or_else(|| A11yError::MissingElement("search input".into()))?;
        Ok(Self {
            form,
            input,
            debounce: None,
        })
    }

    pub fn form(&self) -> NodeId {
        self.form
    }

    pub fn input(&self) -> NodeId {
        self.input
    }

    pub fn owns(&self, doc: &Document, target: NodeId) -> bool {
        doc.contains(self.form, target)
    }

    pub fn on_submit(&mut self, doc: &Document, announcer: &mut Announcer) {
        let value = doc.attribute(self.input, "value").unwrap_or("");
        let query = value.trim();
        if query.is_empty() {
            return;
        }
        announcer.announce_polite(format!("Searching for {query}. Please wait for results."));
        tracing::info!("Searching for: {query}");
    }

    /// Input changed: restart the character-count debounce
    pub fn on_input(&mut self, timers: &mut TimerQueue, now_ms: u64, self_index: usize) {
        if let Some(id) = self.debounce.take() {
            timers.cancel(id);
        }
        self.debounce = Some(timers.schedule(
            now_ms,
            CHAR_COUNT_DEBOUNCE_MS,
            TimerAction::SearchCharCount(self_index),
        ));
    }

    /// Debounce expired: announce the count for the value as it stands
    pub fn char_count_due(&mut self, doc: &Document, announcer: &mut Announcer) {
        self.debounce = None;
        let len = doc
            .attribute(self.input, "value")
            .map(|v| v.chars().count())
            .unwrap_or(0);
        if len >= MIN_ANNOUNCED_LEN {
            announcer.announce_polite(format!("{len} characters entered"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Document, Search) {
        let mut doc = Document::new();
        let form = doc.append_element(NodeId::ROOT, "form");
        doc.set_attribute(form, "role", "search");
        let input = doc.append_element(form, "input");
        doc.set_attribute(input, "type", "search");
        doc.set_attribute(input, "id", "search");
        let button = doc.append_element(form, "button");
        doc.set_attribute(button, "type", "submit");

        let search = Search::bind(&doc, form).unwrap();
        (doc, search)
    }

    #[test]
    fn test_bind_requires_search_input() {
        let mut doc = Document::new();
        let form = doc.append_element(NodeId::ROOT, "form");
        doc.set_attribute(form, "role", "search");
        assert!(matches!(
            Search::bind(&doc, form),
            Err(A11yError::MissingElement(_))
        ));
    }

    #[test]
    fn test_submit_announces_trimmed_query() {
        let (mut doc, mut search) = fixture();
        let mut announcer = Announcer::new();

        doc.set_attribute(search.input(), "value", "  headphones  ");
        search.on_submit(&doc, &mut announcer);
        assert_eq!(
            announcer.next_announcement().unwrap().text,
            "Searching for headphones. Please wait for results."
        );
    }

    #[test]
    fn test_empty_submit_is_silent() {
        let (mut doc, mut search) = fixture();
        let mut announcer = Announcer::new();

        doc.set_attribute(search.input(), "value", "   ");
        search.on_submit(&doc, &mut announcer);
        assert!(!announcer.has_pending());
    }

    #[test]
    fn test_debounced_char_count() {
        let (mut doc, mut search) = fixture();
        let mut announcer = Announcer::new();
        let mut timers = TimerQueue::new();

        doc.set_attribute(search.input(), "value", "sh");
        search.on_input(&mut timers, 0, 0);
        // More typing before the pause elapses reschedules
        doc.set_attribute(search.input(), "value", "shoes");
        search.on_input(&mut timers, 500, 0);

        assert!(timers.advance(1000).is_empty());
        let due = timers.advance(1500);
        assert_eq!(due, vec![TimerAction::SearchCharCount(0)]);

        search.char_count_due(&doc, &mut announcer);
        assert_eq!(
            announcer.next_announcement().unwrap().text,
            "5 characters entered"
        );
        assert!(!announcer.has_pending());
    }

    #[test]
    fn test_short_values_not_announced() {
        let (mut doc, mut search) = fixture();
        let mut announcer = Announcer::new();
        let mut timers = TimerQueue::new();

        doc.set_attribute(search.input(), "value", "ab");
        search.on_input(&mut timers, 0, 0);
        timers.advance(1000);
        search.char_count_due(&doc, &mut announcer);
        assert!(!announcer.has_pending());
    }
}
