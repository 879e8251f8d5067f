//! Dropdown Menu
//!
//! ARIA menu-button pattern with roving tabindex: the trigger toggles
//! the menu, arrow keys cycle the items with wrap-around, Home/End
//! jump, Escape and Tab close.

use axs_a11y::{A11yError, Directional, NavController, NavMode};
use axs_dom::{Document, NodeId};

use crate::event::{Key, Modifiers};

/// Visibility class toggled in lockstep with `aria-expanded`
const SHOW_CLASS: &str = "show";

/// Dropdown menu bound to a trigger button
#[derive(Debug)]
pub struct Dropdown {
    nav: NavController,
}

impl Dropdown {
    /// Bind to a trigger carrying `data-dropdown`; the menu is named by
    /// the trigger's `aria-controls`.
    pub fn bind(doc: &Document, trigger: NodeId) -> Result<Self, A11yError> {
        let menu_id = doc
            .attribute(trigger, "aria-controls")
            .ok_or_else(|| A11yError::MissingElement("dropdown aria-controls".into()))?;
        let menu = doc
            .get_element_by_id(menu_id)
            .ok_or_else(|| A11yError::MissingElement(format!("dropdown menu #{menu_id}")))?;
        Ok(Self {
            nav: NavController::new(menu, trigger, NavMode::Roving, SHOW_CLASS),
        })
    }

    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavController {
        &mut self.nav
    }

    /// Whether the event target belongs to this dropdown
    pub fn owns(&self, doc: &Document, target: NodeId) -> bool {
        doc.contains(self.nav.trigger(), target) || doc.contains(self.nav.container(), target)
    }

    pub fn on_click(&mut self, doc: &mut Document, target: NodeId) {
        if doc.contains(self.nav.trigger(), target) {
            self.nav.toggle(doc);
        } else if self.nav.index_of(target).is_some() {
            // Item activation closes the menu
            self.nav.close(doc);
        }
    }

    /// Returns true when the key was consumed
    pub fn on_keydown(
        &mut self,
        doc: &mut Document,
        target: NodeId,
        key: Key,
        modifiers: Modifiers,
    ) -> bool {
        if doc.contains(self.nav.trigger(), target) {
            return self.on_trigger_key(doc, key);
        }
        // Targets are recomputed at open; a keydown can only come from
        // an item while the menu is open.
        let Some(index) = self.nav.index_of(target) else {
            return false;
        };
        match key {
            Key::ArrowDown => self.nav.handle_directional(doc, Directional::Next, index),
            Key::ArrowUp => self.nav.handle_directional(doc, Directional::Prev, index),
            Key::Home => self.nav.handle_directional(doc, Directional::First, index),
            Key::End => self.nav.handle_directional(doc, Directional::Last, index),
            Key::Escape => self.nav.handle_escape(doc),
            Key::Tab => {
                // Close and let focus move on naturally
                let _ = modifiers;
                self.nav.close(doc);
            }
            Key::Enter | Key::Space => {
                // Activate the item, which closes the menu
                self.nav.close(doc);
            }
            _ => return false,
        }
        true
    }

    fn on_trigger_key(&mut self, doc: &mut Document, key: Key) -> bool {
        match key {
            Key::ArrowDown | Key::Enter | Key::Space => {
                self.nav.open(doc);
                true
            }
            Key::ArrowUp => {
                self.nav.open(doc);
                let last = self.nav.targets().len().saturating_sub(1);
                self.nav.set_active(doc, last);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Document, Dropdown, NodeId, Vec<NodeId>) {
        let mut doc = Document::new();
        let trigger = doc.append_element(NodeId::ROOT, "button");
        doc.set_attribute(trigger, "data-dropdown", "");
        doc.set_attribute(trigger, "aria-controls", "account-menu");
        doc.set_attribute(trigger, "aria-expanded", "false");
        let menu = doc.append_element(NodeId::ROOT, "ul");
        doc.set_attribute(menu, "id", "account-menu");
        doc.set_attribute(menu, "role", "menu");
        let items: Vec<_> = (0..3)
            .map(|_| {
                let item = doc.append_element(menu, "a");
                doc.set_attribute(item, "role", "menuitem");
                doc.set_attribute(item, "tabindex", "-1");
                item
            })
            .collect();
        let dropdown = Dropdown::bind(&doc, trigger).unwrap();
        (doc, dropdown, trigger, items)
    }

    #[test]
    fn test_bind_requires_menu() {
        let mut doc = Document::new();
        let trigger = doc.append_element(NodeId::ROOT, "button");
        doc.set_attribute(trigger, "aria-controls", "nope");
        assert!(matches!(
            Dropdown::bind(&doc, trigger),
            Err(A11yError::MissingElement(_))
        ));
    }

    #[test]
    fn test_arrow_down_from_button_lands_on_first_item() {
        let (mut doc, mut dropdown, trigger, items) = fixture();
        assert!(dropdown.on_keydown(&mut doc, trigger, Key::ArrowDown, Modifiers::NONE));
        assert_eq!(doc.active_element(), Some(items[0]));
    }

    #[test]
    fn test_arrow_cycle_through_items() {
        // ArrowDown from the button, twice more to item 2, once more
        // wraps to item 0.
        let (mut doc, mut dropdown, trigger, items) = fixture();
        dropdown.on_keydown(&mut doc, trigger, Key::ArrowDown, Modifiers::NONE);
        dropdown.on_keydown(&mut doc, items[0], Key::ArrowDown, Modifiers::NONE);
        dropdown.on_keydown(&mut doc, items[1], Key::ArrowDown, Modifiers::NONE);
        assert_eq!(doc.active_element(), Some(items[2]));

        dropdown.on_keydown(&mut doc, items[2], Key::ArrowDown, Modifiers::NONE);
        assert_eq!(doc.active_element(), Some(items[0]));
    }

    #[test]
    fn test_arrow_up_from_button_opens_at_last_item() {
        let (mut doc, mut dropdown, trigger, items) = fixture();
        dropdown.on_keydown(&mut doc, trigger, Key::ArrowUp, Modifiers::NONE);
        assert_eq!(doc.active_element(), Some(items[2]));
    }

    #[test]
    fn test_escape_on_item_closes_and_refocuses_trigger() {
        let (mut doc, mut dropdown, trigger, items) = fixture();
        dropdown.on_keydown(&mut doc, trigger, Key::ArrowDown, Modifiers::NONE);
        dropdown.on_keydown(&mut doc, items[0], Key::Escape, Modifiers::NONE);

        assert!(!dropdown.nav().is_expanded(&doc));
        assert_eq!(doc.active_element(), Some(trigger));
    }

    #[test]
    fn test_item_click_closes() {
        let (mut doc, mut dropdown, trigger, items) = fixture();
        dropdown.on_click(&mut doc, trigger);
        assert!(dropdown.nav().is_expanded(&doc));

        dropdown.on_click(&mut doc, items[1]);
        assert!(!dropdown.nav().is_expanded(&doc));
    }

    #[test]
    fn test_tab_on_item_closes() {
        let (mut doc, mut dropdown, trigger, items) = fixture();
        dropdown.on_keydown(&mut doc, trigger, Key::Enter, Modifiers::NONE);
        assert!(dropdown.on_keydown(&mut doc, items[0], Key::Tab, Modifiers::NONE));
        assert!(!dropdown.nav().is_expanded(&doc));
    }

    #[test]
    fn test_click_toggle() {
        let (mut doc, mut dropdown, trigger, _) = fixture();
        dropdown.on_click(&mut doc, trigger);
        assert!(dropdown.nav().is_expanded(&doc));
        dropdown.on_click(&mut doc, trigger);
        assert!(!dropdown.nav().is_expanded(&doc));
    }
}
