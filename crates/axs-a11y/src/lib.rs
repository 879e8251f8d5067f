//! AccessiShop Accessibility Primitives
//!
//! ARIA roles and state toggles, live-region announcements, reachable
//! focus-target computation, and the keyboard navigation controller
//! shared by the dropdown, mega-menu, and modal components.

pub mod aria;
pub mod focus;
pub mod live_region;
pub mod nav;

pub use aria::AriaRole;
pub use focus::{focusable_within, menu_items_within, TabIndex};
pub use live_region::{Announcement, Announcer, Politeness};
pub use nav::{Directional, NavController, NavMode};

/// Accessibility error
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    /// A referenced container, trigger, or target could not be resolved
    /// in the current document. Absence is a static configuration fact:
    /// callers log it and skip that component instance.
    #[error("missing element: {0}")]
    MissingElement(String),
}
