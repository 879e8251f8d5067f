//! Keyboard Navigation Controller
//!
//! One controller, two disciplines: roving tabindex (menus) and focus
//! trap (modal dialogs). The controller owns the expanded/collapsed
//! cycle of a container and its trigger, recomputes the reachable
//! target list on every open, and keeps arrow-key and Tab movement
//! inside the container.

use axs_dom::{Document, NodeId};

use crate::aria;
use crate::focus::{focusable_within, menu_items_within};

/// Navigation discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    /// Exactly one target carries `tabindex="0"`; arrow keys move the
    /// marker with unconditional wrap-around.
    Roving,
    /// Tab/Shift+Tab cycling is confined to the first..last reachable
    /// targets while the container is open.
    Trap,
}

/// Directional navigation key, normalized from keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directional {
    Next,  // ArrowDown
    Prev,  // ArrowUp
    First, // Home
    Last,  // End
}

/// Keyboard navigation state for one container/trigger pair
#[derive(Debug)]
pub struct NavController {
    container: NodeId,
    trigger: NodeId,
    mode: NavMode,
    show_class: &'static str,
    targets: Vec<NodeId>,
    current: Option<usize>,
    restore_focus: Option<NodeId>,
}

impl NavController {
    pub fn new(container: NodeId, trigger: NodeId, mode: NavMode, show_class: &'static str) -> Self {
        Self {
            container,
            trigger,
            mode,
            show_class,
            targets: Vec::new(),
            current: None,
            restore_focus: None,
        }
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn trigger(&self) -> NodeId {
        self.trigger
    }

    pub fn mode(&self) -> NavMode {
        self.mode
    }

    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    /// Position of a node in the current target list
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.targets.iter().position(|&t| t == id)
    }

    /// Expanded state, read back from the trigger's `aria-expanded`
    pub fn is_expanded(&self, doc: &Document) -> bool {
        aria::expanded(doc, self.trigger)
    }

    /// Recompute the reachable target list from the live document.
    /// Targets may change between opens, so this runs on every open.
    pub fn recompute_targets(&mut self, doc: &Document) {
        self.targets = match self.mode {
            NavMode::Roving => menu_items_within(doc, self.container),
            NavMode::Trap => focusable_within(doc, self.container),
        };
    }

    /// Open the container and move focus in.
    ///
    /// Roving: the first target gets the roving marker and focus.
    /// Trap: the container itself is focused and the first reachable
    /// target is returned so the caller can focus it after the open
    /// transition settles.
    pub fn open(&mut self, doc: &mut Document) -> Option<NodeId> {
        self.open_shell(doc);
        match self.mode {
            NavMode::Roving => {
                self.set_active(doc, 0);
                None
            }
            NavMode::Trap => {
                doc.focus(self.container);
                self.targets.first().copied()
            }
        }
    }

    /// Open without moving focus (hover-driven menus). The first target
    /// still receives the roving marker so Tab can enter the menu.
    pub fn open_without_focus(&mut self, doc: &mut Document) {
        self.open_shell(doc);
        self.mark_active(doc, 0);
    }

    fn open_shell(&mut self, doc: &mut Document) {
        self.restore_focus = doc.active_element();
        aria::set_expanded(doc, self.trigger, true);
        doc.add_class(self.container, self.show_class);
        if self.mode == NavMode::Trap {
            aria::set_hidden(doc, self.container, false);
        }
        self.recompute_targets(doc);
        tracing::debug!(
            "nav open: container {:?}, {} targets",
            self.container,
            self.targets.len()
        );
    }

    /// Close the container, clear roving markers, and restore focus.
    ///
    /// Attribute and class toggles are idempotent; focus is only
    /// restored when the controller was actually expanded, so closing a
    /// never-opened controller does not steal focus.
    pub fn close(&mut self, doc: &mut Document) {
        let was_expanded = self.is_expanded(doc);
        self.close_shell(doc);
        if was_expanded {
            match self.mode {
                NavMode::Roving => doc.focus(self.trigger),
                NavMode::Trap => {
                    // Captured at open time, consumed exactly once
                    if let Some(prev) = self.restore_focus.take() {
                        doc.focus(prev);
                    }
                }
            }
        }
        self.restore_focus = None;
    }

    /// Close without touching focus (hover dismiss, outside click on a
    /// hover menu).
    pub fn close_without_focus(&mut self, doc: &mut Document) {
        self.close_shell(doc);
        self.restore_focus = None;
    }

    fn close_shell(&mut self, doc: &mut Document) {
        aria::set_expanded(doc, self.trigger, false);
        doc.remove_class(self.container, self.show_class);
        if self.mode == NavMode::Trap {
            aria::set_hidden(doc, self.container, true);
        }
        for i in 0..self.targets.len() {
            doc.set_attribute(self.targets[i], "tabindex", "-1");
        }
        self.current = None;
    }

    /// Close if expanded, open otherwise
    pub fn toggle(&mut self, doc: &mut Document) -> Option<NodeId> {
        if self.is_expanded(doc) {
            self.close(doc);
            None
        } else {
            self.open(doc)
        }
    }

    /// Move the roving marker and focus to `index`. Out-of-range
    /// indices are ignored. The active target's tabindex is always
    /// `"0"`, all siblings `"-1"`.
    pub fn set_active(&mut self, doc: &mut Document, index: usize) {
        self.mark_active(doc, index);
        if let Some(&target) = self.targets.get(index) {
            doc.focus(target);
        }
    }

    fn mark_active(&mut self, doc: &mut Document, index: usize) {
        if index >= self.targets.len() {
            return;
        }
        for i in 0..self.targets.len() {
            doc.set_attribute(self.targets[i], "tabindex", "-1");
        }
        doc.set_attribute(self.targets[index], "tabindex", "0");
        self.current = Some(index);
    }

    /// Arrow/Home/End movement from `current`, wrapping unconditionally
    pub fn handle_directional(&mut self, doc: &mut Document, dir: Directional, current: usize) {
        let n = self.targets.len();
        if n == 0 {
            return;
        }
        let next = match dir {
            Directional::Next => (current + 1) % n,
            Directional::Prev => (current + n - 1) % n,
            Directional::First => 0,
            Directional::Last => n - 1,
        };
        self.set_active(doc, next);
    }

    /// Focus-trap boundary handling for Tab/Shift+Tab. Returns true
    /// when the event was consumed (redirected or swallowed).
    ///
    /// With no reachable targets the event is swallowed without moving
    /// focus, keeping Tab from escaping an empty dialog.
    pub fn handle_boundary_tab(&mut self, doc: &mut Document, shift: bool) -> bool {
        let (Some(&first), Some(&last)) = (self.targets.first(), self.targets.last()) else {
            return true;
        };
        let active = doc.active_element();
        if shift {
            if active == Some(first) || active == Some(self.container) {
                doc.focus(last);
                return true;
            }
        } else if active == Some(last) {
            doc.focus(first);
            return true;
        }
        false
    }

    /// Escape closes regardless of which target holds focus
    pub fn handle_escape(&mut self, doc: &mut Document) {
        self.close(doc);
    }

    /// Click-outside-to-dismiss: close unless the activation landed
    /// inside the container or on the trigger.
    pub fn handle_outside_activation(&mut self, doc: &mut Document, target: NodeId) {
        if !doc.contains(self.container, target) && !doc.contains(self.trigger, target) {
            self.close(doc);
        }
    }
}
