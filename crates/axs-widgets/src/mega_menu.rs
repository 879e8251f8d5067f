//! Mega Menu
//!
//! Hover-driven panel: pointer enter opens immediately, pointer leave
//! from the trigger starts a short dwell before dismissal, re-entry
//! cancels it. Tab walks the menu items with wrap-around and closes
//! once the walk passes the last item. Hover transitions never move
//! focus.

use axs_a11y::{A11yError, NavController, NavMode};
use axs_dom::{Document, NodeId};

use crate::event::{Key, Modifiers};
use crate::timer::{TimerAction, TimerId, TimerQueue};

/// Dwell before a pointer-leave dismisses the menu
pub const HOVER_DISMISS_MS: u64 = 100;

const SHOW_CLASS: &str = "show";

/// Hover mega-menu bound to a trigger button
#[derive(Debug)]
pub struct MegaMenu {
    nav: NavController,
    dismiss_timer: Option<TimerId>,
}

impl MegaMenu {
    /// Bind to a trigger carrying `data-megamenu`; the panel is named
    /// by the trigger's `aria-controls`.
    pub fn bind(doc: &Document, trigger: NodeId) -> Result<Self, A11yError> {
        let menu_id = doc
            .attribute(trigger, "aria-controls")
            .ok_or_else(|| A11yError::MissingElement("mega-menu aria-controls".into()))?;
        let menu = doc
            .get_element_by_id(menu_id)
            .ok_or_else(|| A11yError::MissingElement(format!("mega-menu panel #{menu_id}")))?;
        Ok(Self {
            nav: NavController::new(menu, trigger, NavMode::Roving, SHOW_CLASS),
            dismiss_timer: None,
        })
    }

    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    pub fn owns(&self, doc: &Document, target: NodeId) -> bool {
        doc.contains(self.nav.trigger(), target) || doc.contains(self.nav.container(), target)
    }

    fn cancel_dismiss(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.dismiss_timer.take() {
            timers.cancel(id);
        }
    }

    /// Pointer entered the trigger or the panel. Every open cancels the
    /// component's own pending dismiss timer first, so a reopened menu
    /// cannot be closed by a stale timer.
    pub fn on_pointer_enter(&mut self, doc: &mut Document, timers: &mut TimerQueue, target: NodeId) {
        if doc.contains(self.nav.trigger(), target) {
            self.cancel_dismiss(timers);
            self.nav.open_without_focus(doc);
        } else if doc.contains(self.nav.container(), target) {
            self.cancel_dismiss(timers);
        }
    }

    /// Pointer left the trigger (dwell) or the panel (immediate close)
    pub fn on_pointer_leave(
        &mut self,
        doc: &mut Document,
        timers: &mut TimerQueue,
        now_ms: u64,
        self_index: usize,
        target: NodeId,
    ) {
        if doc.contains(self.nav.trigger(), target) {
            self.dismiss_timer = Some(timers.schedule(
                now_ms,
                HOVER_DISMISS_MS,
                TimerAction::MegaMenuDismiss(self_index),
            ));
        } else if doc.contains(self.nav.container(), target) {
            self.nav.close_without_focus(doc);
        }
    }

    /// Dwell expired without re-entry
    pub fn dismiss_due(&mut self, doc: &mut Document) {
        self.dismiss_timer = None;
        self.nav.close_without_focus(doc);
    }

    pub fn on_click(&mut self, doc: &mut Document, target: NodeId) {
        if doc.contains(self.nav.trigger(), target) {
            if self.nav.is_expanded(doc) {
                self.nav.close_without_focus(doc);
            } else {
                self.nav.open_without_focus(doc);
            }
        }
    }

    /// Tab inside the panel advances the roving marker with wrap;
    /// advancing past the last item closes the menu.
    pub fn on_keydown(
        &mut self,
        doc: &mut Document,
        target: NodeId,
        key: Key,
        modifiers: Modifiers,
    ) -> bool {
        if key != Key::Tab || modifiers.shift || !doc.contains(self.nav.container(), target) {
            return false;
        }
        let Some(current) = self.nav.index_of(target) else {
            return false;
        };
        let count = self.nav.targets().len();
        let next = (current + 1) % count;
        self.nav.set_active(doc, next);
        if current == count - 1 {
            // Walked off the end: dismiss
            self.nav.close_without_focus(doc);
        }
        true
    }

    /// Close without focus restoration (outside click, document Escape)
    pub fn dismiss(&mut self, doc: &mut Document) {
        self.nav.close_without_focus(doc);
    }
}
