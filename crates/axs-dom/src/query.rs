//! Element Queries
//!
//! Document-order lookups by role, class, tag, and attribute, plus
//! closest-ancestor search.

use crate::{Document, NodeId};

impl Document {
    /// Elements under `root` whose `role` attribute equals `role`
    pub fn elements_with_role(&self, root: NodeId, role: &str) -> Vec<NodeId> {
        self.select(root, |doc, id| doc.attribute(id, "role") == Some(role))
    }

    /// Elements under `root` carrying the given class
    pub fn elements_with_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.select(root, |doc, id| doc.has_class(id, class))
    }

    /// Elements under `root` with the given tag name
    pub fn elements_with_tag(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.select(root, |doc, id| doc.tag(id) == Some(tag))
    }

    /// Elements under `root` carrying the given attribute (any value)
    pub fn elements_with_attribute(&self, root: NodeId, name: &str) -> Vec<NodeId> {
        self.select(root, |doc, id| doc.has_attribute(id, name))
    }

    /// Elements under `root` whose attribute `name` equals `value`
    pub fn elements_with_attribute_value(
        &self,
        root: NodeId,
        name: &str,
        value: &str,
    ) -> Vec<NodeId> {
        self.select(root, |doc, id| doc.attribute(id, name) == Some(value))
    }

    /// First element under `root` with the given class
    pub fn first_with_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        self.elements_with_class(root, class).into_iter().next()
    }

    /// Closest ancestor (including `node` itself) with the given tag
    pub fn closest_tag(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if self.tag(id) == Some(tag) {
                return Some(id);
            }
            cursor = self.node(id).parent;
        }
        None
    }

    fn select(&self, root: NodeId, pred: impl Fn(&Self, NodeId) -> bool) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.node(id).is_element() && pred(self, id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_query_document_order() {
        let mut doc = Document::new();
        let menu = doc.append_element(NodeId::ROOT, "ul");
        let a = doc.append_element(menu, "li");
        doc.set_attribute(a, "role", "menuitem");
        let b = doc.append_element(menu, "li");
        doc.set_attribute(b, "role", "menuitem");

        assert_eq!(doc.elements_with_role(menu, "menuitem"), vec![a, b]);
        assert_eq!(doc.elements_with_role(NodeId::ROOT, "menuitem"), vec![a, b]);
    }

    #[test]
    fn test_closest_tag() {
        let mut doc = Document::new();
        let button = doc.append_element(NodeId::ROOT, "button");
        let badge = doc.append_element(button, "span");
        doc.add_class(badge, "cart-badge");

        assert_eq!(doc.closest_tag(badge, "button"), Some(button));
        assert_eq!(doc.closest_tag(button, "nav"), None);
    }

    #[test]
    fn test_attribute_queries() {
        let mut doc = Document::new();
        let trigger = doc.append_element(NodeId::ROOT, "button");
        doc.set_attribute(trigger, "data-dropdown", "");
        doc.set_attribute(trigger, "aria-controls", "account-menu");

        assert_eq!(
            doc.elements_with_attribute(NodeId::ROOT, "data-dropdown"),
            vec![trigger]
        );
        assert_eq!(
            doc.elements_with_attribute_value(NodeId::ROOT, "aria-controls", "account-menu"),
            vec![trigger]
        );
    }
}
