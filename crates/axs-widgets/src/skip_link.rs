//! Skip Link
//!
//! Jumps focus to the main-content target. The target receives a
//! transient `tabindex="-1"` so it can take programmatic focus; the
//! marker is cleaned up once focus moves away.

use axs_a11y::A11yError;
use axs_dom::{Document, NodeId};

use crate::event::Key;

/// Skip-to-content link
#[derive(Debug)]
pub struct SkipLink {
    link: NodeId,
    target: NodeId,
    /// Target carrying a transient tabindex marker, pending cleanup
    marked: Option<NodeId>,
}

impl SkipLink {
    /// Bind a `.skip-link`; its `href` fragment must resolve
    pub fn bind(doc: &Document, link: NodeId) -> Result<Self, A11yError> {
        let href = doc
            .attribute(link, "href")
            .ok_or_else(|| A11yError::MissingElement("skip link href".into()))?;
        let fragment = href.trim_start_matches('#');
        let target = doc
            .get_element_by_id(fragment)
            .ok_or_else(|| A11yError::MissingElement(format!("skip link target #{fragment}")))?;
        Ok(Self {
            link,
            target,
            marked: None,
        })
    }

    pub fn link(&self) -> NodeId {
        self.link
    }

    pub fn owns(&self, doc: &Document, target: NodeId) -> bool {
        doc.contains(self.link, target)
    }

    pub fn on_click(&mut self, doc: &mut Document, target: NodeId) {
        if doc.contains(self.link, target) {
            self.activate(doc);
        }
    }

    pub fn on_keydown(&mut self, doc: &mut Document, target: NodeId, key: Key) -> bool {
        if doc.contains(self.link, target) && matches!(key, Key::Enter | Key::Space) {
            self.activate(doc);
            return true;
        }
        false
    }

    fn activate(&mut self, doc: &mut Document) {
        doc.set_attribute(self.target, "tabindex", "-1");
        doc.focus(self.target);
        self.marked = Some(self.target);
    }

    /// Drop the transient marker once focus has moved elsewhere
    pub fn maintain(&mut self, doc: &mut Document) {
        if let Some(marked) = self.marked {
            if doc.active_element() != Some(marked) {
                doc.remove_attribute(marked, "tabindex");
                self.marked = None;
            }
        }
    }
}
