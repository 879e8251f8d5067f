//! Product Card
//!
//! Add-to-cart announcement and badge update, transient button
//! feedback, and Enter-to-activate when the card itself is focused.

use axs_a11y::Announcer;
use axs_dom::{Document, NodeId};

use crate::event::Key;
use crate::timer::{TimerAction, TimerId, TimerQueue};

/// How long the "Added!" feedback stays on the button
pub const FEEDBACK_RESET_MS: u64 = 2000;

/// One product card; the add-to-cart button and product link are
/// optional collaborators.
#[derive(Debug)]
pub struct ProductCard {
    card: NodeId,
    add_button: Option<NodeId>,
    link: Option<NodeId>,
    saved_label: Option<String>,
    feedback: Option<TimerId>,
}

impl ProductCard {
    pub fn bind(doc: &Document, card: NodeId) -> Self {
        Self {
            card,
            add_button: doc.first_with_class(card, "btn-primary"),
            link: doc.first_with_class(card, "product-link"),
            saved_label: None,
            feedback: None,
        }
    }

    pub fn card(&self) -> NodeId {
        self.card
    }

    pub fn owns(&self, doc: &Document, target: NodeId) -> bool {
        doc.contains(self.card, target)
    }

    pub fn on_click(
        &mut self,
        doc: &mut Document,
        announcer: &mut Announcer,
        timers: &mut TimerQueue,
        now_ms: u64,
        self_index: usize,
        target: NodeId,
    ) {
        let Some(button) = self.add_button else {
            return;
        };
        if !doc.contains(button, target) {
            return;
        }
        self.add_to_cart(doc, announcer, timers, now_ms, self_index);
    }

    fn add_to_cart(
        &mut self,
        doc: &mut Document,
        announcer: &mut Announcer,
        timers: &mut TimerQueue,
        now_ms: u64,
        self_index: usize,
    ) {
        let name = self
            .link
            .map(|l| doc.text_content(l).trim().to_string())
            .unwrap_or_default();
        announcer.announce_assertive(format!("{name} has been added to your cart"));

        update_cart_badge(doc);
        self.show_added_feedback(doc, timers, now_ms, self_index);
    }

    fn show_added_feedback(
        &mut self,
        doc: &mut Document,
        timers: &mut TimerQueue,
        now_ms: u64,
        self_index: usize,
    ) {
        let Some(button) = self.add_button else {
            return;
        };
        // A second click while the feedback is showing restarts it
        if let Some(id) = self.feedback.take() {
            timers.cancel(id);
        } else {
            self.saved_label = Some(doc.text_content(button));
        }
        doc.set_text_content(button, "Added!");
        doc.set_attribute(button, "disabled", "");
        self.feedback = Some(timers.schedule(
            now_ms,
            FEEDBACK_RESET_MS,
            TimerAction::CardFeedbackReset(self_index),
        ));
    }

    /// Feedback period over: restore the button
    pub fn feedback_reset_due(&mut self, doc: &mut Document) {
        self.feedback = None;
        let Some(button) = self.add_button else {
            return;
        };
        if let Some(label) = self.saved_label.take() {
            doc.set_text_content(button, &label);
        }
        doc.remove_attribute(button, "disabled");
    }

    /// Enter with the card itself focused activates the product link
    pub fn on_keydown(&mut self, doc: &mut Document, target: NodeId, key: Key) -> bool {
        if key == Key::Enter && target == self.card {
            if let Some(link) = self.link {
                tracing::debug!("activating product link from card");
                doc.focus(link);
            }
            return true;
        }
        false
    }
}

/// Increment the cart badge and keep the enclosing cart button's label
/// in sync. A page without a badge skips both updates.
fn update_cart_badge(doc: &mut Document) {
    let Some(badge) = doc.first_with_class(NodeId::ROOT, "cart-badge") else {
        return;
    };
    let count = doc
        .text_content(badge)
        .trim()
        .parse::<u32>()
        .unwrap_or(0)
        + 1;
    doc.set_text_content(badge, &count.to_string());

    if let Some(cart_button) = doc.closest_tag(badge, "button") {
        doc.set_attribute(
            cart_button,
            "aria-label",
            &format!("Shopping cart ({count} items)"),
        );
    }
}
