//! Focus Targets
//!
//! Computes the ordered, reachable focus targets inside a container.
//! Reachability excludes disabled, hidden, and aria-hidden elements.

use axs_dom::{Document, NodeId};

use crate::aria::{self, AriaRole};

/// Tab index semantics of a `tabindex` attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    NotFocusable,    // negative or unparseable
    Sequential(i32), // zero or positive
}

impl TabIndex {
    pub fn parse(value: &str) -> Self {
        match value.parse::<i32>() {
            Ok(n) if n < 0 => Self::NotFocusable,
            Ok(n) => Self::Sequential(n),
            Err(_) => Self::NotFocusable,
        }
    }

    pub fn is_focusable(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }
}

/// Visible, enabled, and not hidden from assistive technology
pub fn is_reachable(doc: &Document, id: NodeId) -> bool {
    !doc.has_attribute(id, "disabled")
        && !doc.has_attribute(id, "hidden")
        && !aria::hidden(doc, id)
}

/// Member of the tabbable set: native form controls, links with an
/// href, explicit non-negative tabindex, or contenteditable hosts.
pub fn is_focusable(doc: &Document, id: NodeId) -> bool {
    if !is_reachable(doc, id) {
        return false;
    }
    let Some(tag) = doc.tag(id) else {
        return false;
    };
    match tag {
        "button" | "input" | "select" | "textarea" => true,
        "a" => doc.has_attribute(id, "href"),
        _ => {
            doc.attribute(id, "tabindex")
                .is_some_and(|v| TabIndex::parse(v).is_focusable())
                || doc.attribute(id, "contenteditable") == Some("true")
        }
    }
}

/// Reachable focusable elements under `container`, in document order
pub fn focusable_within(doc: &Document, container: NodeId) -> Vec<NodeId> {
    doc.descendants(container)
        .into_iter()
        .filter(|&id| is_focusable(doc, id))
        .collect()
}

/// Reachable `role="menuitem"` elements under `container`, in document order
pub fn menu_items_within(doc: &Document, container: NodeId) -> Vec<NodeId> {
    doc.descendants(container)
        .into_iter()
        .filter(|&id| aria::role_of(doc, id) == Some(AriaRole::MenuItem) && is_reachable(doc, id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_index() {
        assert!(!TabIndex::parse("-1").is_focusable());
        assert!(TabIndex::parse("0").is_focusable());
        assert!(TabIndex::parse("5").is_focusable());
        assert!(!TabIndex::parse("abc").is_focusable());
    }

    #[test]
    fn test_focusable_filtering() {
        let mut doc = Document::new();
        let modal = doc.append_element(NodeId::ROOT, "div");

        let input = doc.append_element(modal, "input");
        let disabled = doc.append_element(modal, "button");
        doc.set_attribute(disabled, "disabled", "");
        let plain_link = doc.append_element(modal, "a");
        let real_link = doc.append_element(modal, "a");
        doc.set_attribute(real_link, "href", "/cart");
        let div = doc.append_element(modal, "div");
        let tabbable_div = doc.append_element(modal, "div");
        doc.set_attribute(tabbable_div, "tabindex", "0");
        let hidden_button = doc.append_element(modal, "button");
        doc.set_attribute(hidden_button, "aria-hidden", "true");

        let _ = (plain_link, div);
        assert_eq!(
            focusable_within(&doc, modal),
            vec![input, real_link, tabbable_div]
        );
    }

    #[test]
    fn test_menu_items_skip_unreachable() {
        let mut doc = Document::new();
        let menu = doc.append_element(NodeId::ROOT, "ul");
        let a = doc.append_element(menu, "a");
        doc.set_attribute(a, "role", "menuitem");
        let b = doc.append_element(menu, "a");
        doc.set_attribute(b, "role", "menuitem");
        doc.set_attribute(b, "hidden", "");

        assert_eq!(menu_items_within(&doc, menu), vec![a]);
    }
}
