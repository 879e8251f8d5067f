//! Document
//!
//! Owns the node arena. Tracks the active (focused) element and the
//! scroll-lock flag modal dialogs toggle while open.

use std::collections::HashMap;

use crate::{Node, NodeData, NodeId};

/// A document: arena of nodes plus document-level state
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    ids: HashMap<String, NodeId>,
    active: Option<NodeId>,
    scroll_locked: bool,
}

impl Document {
    /// Create an empty document (root node only)
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
            ids: HashMap::new(),
            active: None,
            scroll_locked: false,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        false // root node always exists
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Create a detached element node
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.push(Node::text(content))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append a child to a parent node
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Create an element and append it in one step
    pub fn append_element(&mut self, parent: NodeId, tag: impl Into<String>) -> NodeId {
        let id = self.create_element(tag);
        self.append_child(parent, id);
        id
    }

    /// Create a text node and append it in one step
    pub fn append_text(&mut self, parent: NodeId, content: impl Into<String>) -> NodeId {
        let id = self.create_text(content);
        self.append_child(parent, id);
        id
    }

    // --- Attributes -----------------------------------------------------

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).as_element()?.attribute(name)
    }

    /// Set an attribute. Setting `id` also registers the element for
    /// `get_element_by_id` lookup.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if name == "id" {
            self.ids.insert(value.to_string(), id);
        }
        if let Some(el) = self.node_mut(id).as_element_mut() {
            el.set_attribute(name, value);
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let Some(el) = self.node_mut(id).as_element_mut() {
            if let Some(old) = el.remove_attribute(name) {
                if name == "id" {
                    self.ids.remove(&old);
                }
            }
        }
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.node(id)
            .as_element()
            .is_some_and(|el| el.has_attribute(name))
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node(id).as_element().map(|el| el.tag.as_str())
    }

    // --- Classes --------------------------------------------------------

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.node_mut(id).as_element_mut() {
            el.add_class(class);
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.node_mut(id).as_element_mut() {
            el.remove_class(class);
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).as_element().is_some_and(|el| el.has_class(class))
    }

    // --- Text -----------------------------------------------------------

    /// Replace the node's children with a single text node
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        let children = std::mem::take(&mut self.node_mut(id).children);
        for child in children {
            self.node_mut(child).parent = None;
        }
        self.append_text(id, text);
    }

    /// Concatenated text of the subtree, in document order
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        if let Some(text) = self.node(id).as_text() {
            out.push_str(text);
        }
        for &child in &self.node(id).children {
            self.collect_text(child, out);
        }
    }

    // --- Structure ------------------------------------------------------

    /// True when `node` is `ancestor` or lies in its subtree
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.node(id).parent;
        }
        false
    }

    /// Subtree of `root` in preorder, excluding `root` itself
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.walk(root, &mut out);
        out
    }

    fn walk(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.node(id).children {
            out.push(child);
            self.walk(child, out);
        }
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    // --- Focus and scroll lock ------------------------------------------

    /// Move document focus to the given node
    pub fn focus(&mut self, id: NodeId) {
        tracing::debug!("focus -> node {}", id.0);
        self.active = Some(id);
    }

    /// Clear document focus
    pub fn blur(&mut self) {
        self.active = None;
    }

    pub fn active_element(&self) -> Option<NodeId> {
        self.active
    }

    /// Suppress page scroll (modal open)
    pub fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_building() {
        let mut doc = Document::new();
        let nav = doc.append_element(NodeId::ROOT, "nav");
        let button = doc.append_element(nav, "button");

        assert_eq!(doc.node(button).parent, Some(nav));
        assert!(doc.contains(nav, button));
        assert!(doc.contains(button, button));
        assert!(!doc.contains(button, nav));
    }

    #[test]
    fn test_id_lookup() {
        let mut doc = Document::new();
        let el = doc.append_element(NodeId::ROOT, "div");
        doc.set_attribute(el, "id", "main-content");

        assert_eq!(doc.get_element_by_id("main-content"), Some(el));

        doc.remove_attribute(el, "id");
        assert_eq!(doc.get_element_by_id("main-content"), None);
    }

    #[test]
    fn test_text_content() {
        let mut doc = Document::new();
        let link = doc.append_element(NodeId::ROOT, "a");
        let span = doc.append_element(link, "span");
        doc.append_text(span, "Wireless ");
        doc.append_text(link, "Headphones");

        assert_eq!(doc.text_content(link), "Wireless Headphones");

        doc.set_text_content(link, "3");
        assert_eq!(doc.text_content(link), "3");
    }

    #[test]
    fn test_focus_tracking() {
        let mut doc = Document::new();
        let button = doc.append_element(NodeId::ROOT, "button");

        assert_eq!(doc.active_element(), None);
        doc.focus(button);
        assert_eq!(doc.active_element(), Some(button));
        doc.blur();
        assert_eq!(doc.active_element(), None);
    }
}
