//! ARIA Support
//!
//! The roles and boolean states the page toggles, plus typed accessors
//! over document attributes.

use axs_dom::{Document, NodeId};

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // Landmark roles
    Banner,
    ContentInfo,
    Main,
    Navigation,
    Search,

    // Widget roles
    Button,
    Dialog,
    Menu,
    MenuBar,
    MenuItem,
    Status,
}

impl AriaRole {
    /// Parse from attribute value
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_lowercase().as_str() {
            "banner" => Self::Banner,
            "contentinfo" => Self::ContentInfo,
            "main" => Self::Main,
            "navigation" => Self::Navigation,
            "search" => Self::Search,
            "button" => Self::Button,
            "dialog" => Self::Dialog,
            "menu" => Self::Menu,
            "menubar" => Self::MenuBar,
            "menuitem" => Self::MenuItem,
            "status" => Self::Status,
            _ => return None,
        })
    }

    /// Attribute value for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Banner => "banner",
            Self::ContentInfo => "contentinfo",
            Self::Main => "main",
            Self::Navigation => "navigation",
            Self::Search => "search",
            Self::Button => "button",
            Self::Dialog => "dialog",
            Self::Menu => "menu",
            Self::MenuBar => "menubar",
            Self::MenuItem => "menuitem",
            Self::Status => "status",
        }
    }

    /// Check if role is widget
    pub fn is_widget(&self) -> bool {
        matches!(
            self,
            Self::Button | Self::Dialog | Self::Menu | Self::MenuBar | Self::MenuItem
        )
    }

    /// Check if role is landmark
    pub fn is_landmark(&self) -> bool {
        matches!(
            self,
            Self::Banner | Self::ContentInfo | Self::Main | Self::Navigation | Self::Search
        )
    }
}

/// Read the role attribute of an element
pub fn role_of(doc: &Document, id: NodeId) -> Option<AriaRole> {
    doc.attribute(id, "role").and_then(AriaRole::parse)
}

/// Read `aria-expanded` (absent counts as collapsed)
pub fn expanded(doc: &Document, id: NodeId) -> bool {
    doc.attribute(id, "aria-expanded") == Some("true")
}

/// Write `aria-expanded` as "true"/"false"
pub fn set_expanded(doc: &mut Document, id: NodeId, value: bool) {
    doc.set_attribute(id, "aria-expanded", if value { "true" } else { "false" });
}

/// Read `aria-hidden` (absent counts as visible)
pub fn hidden(doc: &Document, id: NodeId) -> bool {
    doc.attribute(id, "aria-hidden") == Some("true")
}

/// Write `aria-hidden` as "true"/"false"
pub fn set_hidden(doc: &mut Document, id: NodeId, value: bool) {
    doc.set_attribute(id, "aria-hidden", if value { "true" } else { "false" });
}
