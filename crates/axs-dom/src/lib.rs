//! AccessiShop DOM - Headless Document Model
//!
//! Arena-backed node tree with attributes, class lists, id lookup,
//! and document focus tracking. No parsing, no layout, no rendering:
//! just enough document structure for accessibility behaviors to act on.

mod document;
mod node;
mod query;

pub use document::Document;
pub use node::{ElementData, Node, NodeData};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// The document root node
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}
