//! Page Registry
//!
//! Owns the document, the announcement queue, the timer queue, and
//! every bound component. Input events are routed to the component
//! owning the target, then the document-level dismissal rules run
//! against exactly the controllers that are currently expanded:
//! Escape closes open menus, and a click outside a menu's container
//! and trigger dismisses it.

use axs_a11y::{Announcement, Announcer};
use axs_dom::{Document, NodeId};

use crate::dropdown::Dropdown;
use crate::event::{InputEvent, Key, Modifiers};
use crate::mega_menu::MegaMenu;
use crate::modal::Modal;
use crate::product_card::ProductCard;
use crate::search::Search;
use crate::shortcuts::Shortcuts;
use crate::skip_link::SkipLink;
use crate::timer::{TimerAction, TimerQueue};

/// All accessibility behavior bound to one document
#[derive(Debug)]
pub struct Page {
    doc: Document,
    announcer: Announcer,
    timers: TimerQueue,
    now_ms: u64,
    dropdowns: Vec<Dropdown>,
    mega_menus: Vec<MegaMenu>,
    modals: Vec<Modal>,
    searches: Vec<Search>,
    cards: Vec<ProductCard>,
    skip_links: Vec<SkipLink>,
    shortcuts: Shortcuts,
}

impl Page {
    /// Scan the document and bind every component instance. A component
    /// whose collaborators cannot be resolved is logged and skipped;
    /// its siblings still bind.
    pub fn bind(doc: Document) -> Self {
        tracing::info!("Initializing accessibility features");
        let mut page = Self {
            doc,
            announcer: Announcer::new(),
            timers: TimerQueue::new(),
            now_ms: 0,
            dropdowns: Vec::new(),
            mega_menus: Vec::new(),
            modals: Vec::new(),
            searches: Vec::new(),
            cards: Vec::new(),
            skip_links: Vec::new(),
            shortcuts: Shortcuts::new(),
        };

        for trigger in page.doc.elements_with_attribute(NodeId::ROOT, "data-megamenu") {
            match MegaMenu::bind(&page.doc, trigger) {
                Ok(menu) => page.mega_menus.push(menu),
                Err(e) => tracing::warn!("skipping mega-menu: {e}"),
            }
        }
        for trigger in page.doc.elements_with_attribute(NodeId::ROOT, "data-dropdown") {
            match Dropdown::bind(&page.doc, trigger) {
                Ok(dropdown) => page.dropdowns.push(dropdown),
                Err(e) => tracing::warn!("skipping dropdown: {e}"),
            }
        }
        for container in page.doc.elements_with_class(NodeId::ROOT, "modal") {
            match Modal::bind(&mut page.doc, container) {
                Ok(modal) => page.modals.push(modal),
                Err(e) => tracing::warn!("skipping modal: {e}"),
            }
        }
        for form in page.doc.elements_with_tag(NodeId::ROOT, "form") {
            if page.doc.attribute(form, "role") != Some("search") {
                continue;
            }
            match Search::bind(&page.doc, form) {
                Ok(search) => page.searches.push(search),
                Err(e) => tracing::warn!("skipping search form: {e}"),
            }
        }
        for card in page.doc.elements_with_class(NodeId::ROOT, "product-card") {
            let widget = ProductCard::bind(&page.doc, card);
            page.cards.push(widget);
        }
        for link in page.doc.elements_with_class(NodeId::ROOT, "skip-link") {
            match SkipLink::bind(&page.doc, link) {
                Ok(skip) => page.skip_links.push(skip),
                Err(e) => tracing::warn!("skipping skip link: {e}"),
            }
        }

        page.announcer.announce_polite("AccessiShop homepage loaded");
        tracing::info!(
            "Accessibility features initialized: {} dropdowns, {} mega-menus, {} modals, {} searches, {} cards",
            page.dropdowns.len(),
            page.mega_menus.len(),
            page.modals.len(),
            page.searches.len(),
            page.cards.len()
        );
        page
    }

    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn dropdowns(&self) -> &[Dropdown] {
        &self.dropdowns
    }

    pub fn mega_menus(&self) -> &[MegaMenu] {
        &self.mega_menus
    }

    pub fn modals(&self) -> &[Modal] {
        &self.modals
    }

    pub fn searches(&self) -> &[Search] {
        &self.searches
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    pub fn skip_links(&self) -> &[SkipLink] {
        &self.skip_links
    }

    /// Drain pending announcements in announcement order
    pub fn take_announcements(&mut self) -> Vec<Announcement> {
        self.announcer.drain()
    }

    /// Route one interaction callback. Runs to completion before the
    /// next event is dispatched.
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::Click { target } => self.on_click(target),
            InputEvent::KeyDown {
                target,
                key,
                modifiers,
            } => self.on_keydown(target, key, modifiers),
            InputEvent::PointerEnter { target } => self.on_pointer_enter(target),
            InputEvent::PointerLeave { target } => self.on_pointer_leave(target),
            InputEvent::Submit { target } => self.on_submit(target),
            InputEvent::Input { target } => self.on_input(target),
        }
        for skip in &mut self.skip_links {
            skip.maintain(&mut self.doc);
        }
    }

    /// Advance the logical clock, firing due timers
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
        for action in self.timers.advance(self.now_ms) {
            match action {
                TimerAction::MegaMenuDismiss(i) => {
                    if let Some(menu) = self.mega_menus.get_mut(i) {
                        menu.dismiss_due(&mut self.doc);
                    }
                }
                TimerAction::DeferredFocus(id) => self.doc.focus(id),
                TimerAction::SearchCharCount(i) => {
                    if let Some(search) = self.searches.get_mut(i) {
                        search.char_count_due(&self.doc, &mut self.announcer);
                    }
                }
                TimerAction::CardFeedbackReset(i) => {
                    if let Some(card) = self.cards.get_mut(i) {
                        card.feedback_reset_due(&mut self.doc);
                    }
                }
            }
        }
    }

    fn on_click(&mut self, target: NodeId) {
        for dropdown in &mut self.dropdowns {
            if dropdown.owns(&self.doc, target) {
                dropdown.on_click(&mut self.doc, target);
            }
        }
        for menu in &mut self.mega_menus {
            if menu.owns(&self.doc, target) {
                menu.on_click(&mut self.doc, target);
            }
        }
        for modal in &mut self.modals {
            if modal.owns(&self.doc, target) {
                modal.on_click(
                    &mut self.doc,
                    &mut self.announcer,
                    &mut self.timers,
                    self.now_ms,
                    target,
                );
            }
        }
        for i in 0..self.cards.len() {
            let card = &mut self.cards[i];
            if card.owns(&self.doc, target) {
                card.on_click(
                    &mut self.doc,
                    &mut self.announcer,
                    &mut self.timers,
                    self.now_ms,
                    i,
                    target,
                );
            }
        }
        for skip in &mut self.skip_links {
            if skip.owns(&self.doc, target) {
                skip.on_click(&mut self.doc, target);
            }
        }
        self.dismiss_outside(target);
    }

    /// Click-outside dismissal for the expanded menu controllers
    fn dismiss_outside(&mut self, target: NodeId) {
        for dropdown in &mut self.dropdowns {
            if dropdown.nav().is_expanded(&self.doc) {
                dropdown
                    .nav_mut()
                    .handle_outside_activation(&mut self.doc, target);
            }
        }
        for menu in &mut self.mega_menus {
            if menu.nav().is_expanded(&self.doc) && !menu.owns(&self.doc, target) {
                menu.dismiss(&mut self.doc);
            }
        }
    }

    fn on_keydown(&mut self, target: NodeId, key: Key, modifiers: Modifiers) {
        if modifiers.alt && self.shortcuts.on_keydown(&mut self.doc, key, modifiers) {
            return;
        }
        for dropdown in &mut self.dropdowns {
            if dropdown.owns(&self.doc, target) {
                dropdown.on_keydown(&mut self.doc, target, key, modifiers);
            }
        }
        for menu in &mut self.mega_menus {
            if menu.owns(&self.doc, target) {
                menu.on_keydown(&mut self.doc, target, key, modifiers);
            }
        }
        for modal in &mut self.modals {
            modal.on_keydown(&mut self.doc, &mut self.announcer, target, key, modifiers);
        }
        for card in &mut self.cards {
            if card.owns(&self.doc, target) {
                card.on_keydown(&mut self.doc, target, key);
            }
        }
        for skip in &mut self.skip_links {
            skip.on_keydown(&mut self.doc, target, key);
        }
        // Document-level Escape closes any open menu; modals close
        // themselves only when focus is inside.
        if key == Key::Escape {
            for dropdown in &mut self.dropdowns {
                if dropdown.nav().is_expanded(&self.doc) {
                    dropdown.nav_mut().handle_escape(&mut self.doc);
                }
            }
            for menu in &mut self.mega_menus {
                if menu.nav().is_expanded(&self.doc) {
                    menu.dismiss(&mut self.doc);
                }
            }
        }
    }

    fn on_pointer_enter(&mut self, target: NodeId) {
        for menu in &mut self.mega_menus {
            if menu.owns(&self.doc, target) {
                menu.on_pointer_enter(&mut self.doc, &mut self.timers, target);
            }
        }
    }

    fn on_pointer_leave(&mut self, target: NodeId) {
        for i in 0..self.mega_menus.len() {
            let menu = &mut self.mega_menus[i];
            if menu.owns(&self.doc, target) {
                menu.on_pointer_leave(&mut self.doc, &mut self.timers, self.now_ms, i, target);
            }
        }
    }

    fn on_submit(&mut self, target: NodeId) {
        for search in &mut self.searches {
            if search.owns(&self.doc, target) {
                search.on_submit(&self.doc, &mut self.announcer);
            }
        }
    }

    fn on_input(&mut self, target: NodeId) {
        for i in 0..self.searches.len() {
            let search = &mut self.searches[i];
            if search.input() == target {
                search.on_input(&mut self.timers, self.now_ms, i);
            }
        }
    }
}
