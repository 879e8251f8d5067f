//! AccessiShop Page Components
//!
//! Each component is a small wrapper binding keyboard and pointer
//! behavior onto a piece of the document: dropdown menus, a hover
//! mega-menu, a modal dialog, the search box, product cards, the skip
//! link, and global shortcuts. The `Page` registry owns the document
//! and routes input events, applying document-level dismissal rules to
//! the controllers that are currently expanded.

pub mod dropdown;
pub mod event;
pub mod mega_menu;
pub mod modal;
pub mod page;
pub mod product_card;
pub mod search;
pub mod shortcuts;
pub mod skip_link;
pub mod timer;

pub use dropdown::Dropdown;
pub use event::{InputEvent, Key, Modifiers};
pub use mega_menu::MegaMenu;
pub use modal::Modal;
pub use page::Page;
pub use product_card::ProductCard;
pub use search::Search;
pub use shortcuts::Shortcuts;
pub use skip_link::SkipLink;
pub use timer::{TimerAction, TimerId, TimerQueue};
