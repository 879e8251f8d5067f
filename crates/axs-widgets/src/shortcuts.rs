//! Global Keyboard Shortcuts
//!
//! Alt-key jumps to the page's landmarks: search, main navigation,
//! and the cart control. Missing targets are skipped silently.

use axs_dom::{Document, NodeId};

use crate::event::{Key, Modifiers};

/// Global Alt-key shortcut handler
#[derive(Debug, Default)]
pub struct Shortcuts;

impl Shortcuts {
    pub fn new() -> Self {
        Self
    }

    /// Returns true when the shortcut was recognized
    pub fn on_keydown(&self, doc: &mut Document, key: Key, modifiers: Modifiers) -> bool {
        if !modifiers.alt {
            return false;
        }
        match key {
            Key::Char('s') => focus_if_present(doc, doc.get_element_by_id("search")),
            Key::Char('m') => focus_if_present(doc, first_nav_menu_item(doc)),
            Key::Char('c') => focus_if_present(doc, cart_control(doc)),
            _ => false,
        }
    }
}

fn focus_if_present(doc: &mut Document, target: Option<NodeId>) -> bool {
    match target {
        Some(id) => {
            doc.focus(id);
            true
        }
        // Recognized shortcut, absent target: swallow the key anyway
        None => true,
    }
}

fn first_nav_menu_item(doc: &Document) -> Option<NodeId> {
    doc.elements_with_tag(NodeId::ROOT, "nav")
        .into_iter()
        .find_map(|nav| doc.elements_with_role(nav, "menuitem").into_iter().next())
}

fn cart_control(doc: &Document) -> Option<NodeId> {
    doc.descendants(NodeId::ROOT).into_iter().find(|&id| {
        doc.attribute(id, "aria-label")
            .is_some_and(|label| label.to_lowercase().contains("cart"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let input = doc.append_element(NodeId::ROOT, "input");
        doc.set_attribute(input, "id", "search");
        let nav = doc.append_element(NodeId::ROOT, "nav");
        let item = doc.append_element(nav, "a");
        doc.set_attribute(item, "role", "menuitem");
        let cart = doc.append_element(NodeId::ROOT, "button");
        doc.set_attribute(cart, "aria-label", "Shopping cart (0 items)");
        (doc, input, item, cart)
    }

    #[test]
    fn test_alt_shortcuts_move_focus() {
        let (mut doc, input, item, cart) = fixture();
        let shortcuts = Shortcuts::new();

        assert!(shortcuts.on_keydown(&mut doc, Key::Char('s'), Modifiers::alt()));
        assert_eq!(doc.active_element(), Some(input));

        assert!(shortcuts.on_keydown(&mut doc, Key::Char('m'), Modifiers::alt()));
        assert_eq!(doc.active_element(), Some(item));

        assert!(shortcuts.on_keydown(&mut doc, Key::Char('c'), Modifiers::alt()));
        assert_eq!(doc.active_element(), Some(cart));
    }

    #[test]
    fn test_without_alt_nothing_happens() {
        let (mut doc, ..) = fixture();
        let shortcuts = Shortcuts::new();
        assert!(!shortcuts.on_keydown(&mut doc, Key::Char('s'), Modifiers::NONE));
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn test_missing_target_is_skipped() {
        let mut doc = Document::new();
        let shortcuts = Shortcuts::new();
        assert!(shortcuts.on_keydown(&mut doc, Key::Char('s'), Modifiers::alt()));
        assert_eq!(doc.active_element(), None);
    }
}
