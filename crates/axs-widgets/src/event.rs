//! Input Events
//!
//! Normalized interaction events. Every event names its target node;
//! dispatch is synchronous and runs to completion before the next
//! event is delivered.

use axs_dom::NodeId;

/// Keyboard key, normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Enter,
    Space,
    Escape,
    Tab,
    Char(char),
}

/// Modifier state at event time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        alt: false,
        ctrl: false,
        shift: false,
    };

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }
}

/// A discrete interaction callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Click {
        target: NodeId,
    },
    KeyDown {
        target: NodeId,
        key: Key,
        modifiers: Modifiers,
    },
    PointerEnter {
        target: NodeId,
    },
    PointerLeave {
        target: NodeId,
    },
    /// Form submission
    Submit {
        target: NodeId,
    },
    /// Text input value changed
    Input {
        target: NodeId,
    },
}

impl InputEvent {
    pub fn key_down(target: NodeId, key: Key) -> Self {
        Self::KeyDown {
            target,
            key,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn target(&self) -> NodeId {
        match *self {
            Self::Click { target }
            | Self::KeyDown { target, .. }
            | Self::PointerEnter { target }
            | Self::PointerLeave { target }
            | Self::Submit { target }
            | Self::Input { target } => target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_target() {
        let id = NodeId::ROOT;
        assert_eq!(InputEvent::Click { target: id }.target(), id);
        assert_eq!(InputEvent::key_down(id, Key::Tab).target(), id);
    }

    #[test]
    fn test_modifier_builders() {
        assert!(Modifiers::alt().alt);
        assert!(!Modifiers::alt().shift);
        assert!(Modifiers::shift().shift);
    }
}
