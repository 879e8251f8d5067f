//! DOM Node
//!
//! Node kinds and element data: tag name, attributes, class list.

use crate::NodeId;

/// DOM node
#[derive(Debug)]
pub struct Node {
    /// Parent node (None if detached or root)
    pub parent: Option<NodeId>,
    /// Children in document order
    pub children: Vec<NodeId>,
    /// Node-specific data
    pub data: NodeData,
}

/// Node-specific payload
#[derive(Debug)]
pub enum NodeData {
    Document,
    Element(ElementData),
    Text(String),
}

impl Node {
    /// Create a new element node
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data: NodeData::Element(ElementData::new(tag)),
        }
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data: NodeData::Text(content.into()),
        }
    }

    /// Create the document node
    pub fn document() -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data: NodeData::Document,
        }
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Element data: tag, attributes, class list
#[derive(Debug)]
pub struct ElementData {
    pub tag: String,
    attributes: Vec<Attr>,
    classes: Vec<String>,
}

/// Single attribute
#[derive(Debug, Clone)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl ElementData {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Get attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set attribute, replacing any existing value
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(attr) = self.attributes.iter_mut().find(|a| a.name == name) {
            attr.value = value.to_string();
        } else {
            self.attributes.push(Attr {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    }

    /// Remove attribute, returning the old value
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|a| a.name == name)?;
        Some(self.attributes.remove(index).value)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add class (no-op if already present)
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes() {
        let mut el = ElementData::new("button");
        el.set_attribute("aria-expanded", "false");
        assert_eq!(el.attribute("aria-expanded"), Some("false"));

        el.set_attribute("aria-expanded", "true");
        assert_eq!(el.attribute("aria-expanded"), Some("true"));

        assert_eq!(el.remove_attribute("aria-expanded"), Some("true".into()));
        assert!(!el.has_attribute("aria-expanded"));
    }

    #[test]
    fn test_classes() {
        let mut el = ElementData::new("div");
        el.add_class("show");
        el.add_class("show");
        assert!(el.has_class("show"));

        el.remove_class("show");
        assert!(!el.has_class("show"));
    }

    #[test]
    fn test_node_kinds() {
        assert!(Node::element("div").is_element());
        assert!(!Node::text("hi").is_element());
        assert_eq!(Node::text("hi").as_text(), Some("hi"));
    }
}
