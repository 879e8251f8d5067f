//! Modal Dialog
//!
//! Focus-trap discipline: while open, Tab and Shift+Tab cycle within
//! the dialog's reachable controls, the page behind is scroll-locked,
//! and closing restores focus to whatever held it before open.

use axs_a11y::{aria, A11yError, Announcer, NavController, NavMode};
use axs_dom::{Document, NodeId};

use crate::event::{Key, Modifiers};
use crate::timer::{TimerAction, TimerQueue};

/// Delay before the first control receives focus, accommodating the
/// open transition.
pub const INITIAL_FOCUS_DELAY_MS: u64 = 100;

const OPEN_CLASS: &str = "modal-open";

/// Modal dialog with trigger buttons, close buttons, and an optional
/// backdrop
#[derive(Debug)]
pub struct Modal {
    nav: NavController,
    triggers: Vec<NodeId>,
    close_buttons: Vec<NodeId>,
    backdrop: Option<NodeId>,
}

impl Modal {
    /// Bind a `.modal` container. Triggers, close buttons, and the
    /// backdrop are matched by `data-modal-trigger` / `data-modal-close`
    /// / `data-modal-backdrop` carrying the modal's id; all of them are
    /// optional collaborators.
    pub fn bind(doc: &mut Document, container: NodeId) -> Result<Self, A11yError> {
        let modal_id = doc
            .attribute(container, "id")
            .ok_or_else(|| A11yError::MissingElement("modal id".into()))?
            .to_string();

        let triggers =
            doc.elements_with_attribute_value(NodeId::ROOT, "data-modal-trigger", &modal_id);
        let close_buttons =
            doc.elements_with_attribute_value(container, "data-modal-close", &modal_id);
        let backdrop = doc
            .elements_with_attribute_value(container, "data-modal-backdrop", &modal_id)
            .into_iter()
            .next();

        // Hidden until opened; the trap reads expanded state off the
        // container itself since a modal can have several triggers.
        aria::set_hidden(doc, container, true);
        aria::set_expanded(doc, container, false);

        Ok(Self {
            nav: NavController::new(container, container, NavMode::Trap, OPEN_CLASS),
            triggers,
            close_buttons,
            backdrop,
        })
    }

    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    pub fn container(&self) -> NodeId {
        self.nav.container()
    }

    pub fn is_open(&self, doc: &Document) -> bool {
        doc.has_class(self.container(), OPEN_CLASS)
    }

    pub fn owns(&self, doc: &Document, target: NodeId) -> bool {
        doc.contains(self.container(), target)
            || self.triggers.iter().any(|&t| doc.contains(t, target))
    }

    pub fn open(
        &mut self,
        doc: &mut Document,
        announcer: &mut Announcer,
        timers: &mut TimerQueue,
        now_ms: u64,
    ) {
        let deferred = self.nav.open(doc);
        doc.set_scroll_locked(true);
        if let Some(first) = deferred {
            timers.schedule(now_ms, INITIAL_FOCUS_DELAY_MS, TimerAction::DeferredFocus(first));
        }
        announcer.announce_polite("Modal dialog opened");
    }

    pub fn close(&mut self, doc: &mut Document, announcer: &mut Announcer) {
        self.nav.close(doc);
        doc.set_scroll_locked(false);
        announcer.announce_polite("Modal dialog closed");
    }

    pub fn on_click(
        &mut self,
        doc: &mut Document,
        announcer: &mut Announcer,
        timers: &mut TimerQueue,
        now_ms: u64,
        target: NodeId,
    ) {
        if self.triggers.iter().any(|&t| doc.contains(t, target)) {
            self.open(doc, announcer, timers, now_ms);
        } else if self.close_buttons.iter().any(|&b| doc.contains(b, target))
            || self.backdrop == Some(target)
        {
            self.close(doc, announcer);
        }
    }

    /// Keydown bubbling from inside the dialog. Returns true when
    /// consumed.
    pub fn on_keydown(
        &mut self,
        doc: &mut Document,
        announcer: &mut Announcer,
        target: NodeId,
        key: Key,
        modifiers: Modifiers,
    ) -> bool {
        if !doc.contains(self.container(), target) || !self.is_open(doc) {
            return false;
        }
        match key {
            Key::Escape => {
                self.close(doc, announcer);
                true
            }
            Key::Tab => self.nav.handle_boundary_tab(doc, modifiers.shift),
            _ => false,
        }
    }
}
