//! Toolkit-independent keyboard events.
//!
//! Front ends translate their native key events into [`KeyPress`] so that the
//! modal toggle and result navigation can be driven and tested without a UI.

/// A key, named after the DOM `KeyboardEvent.key` values the widget cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Tab,
    Shift,
    Enter,
    Escape,
    Backspace,
    /// A printable character
    Character(char),
    /// Any other key (function keys, Home, ...)
    Other,
}

impl Key {
    /// Parse a DOM-style key name (`"ArrowDown"`, `"Escape"`, `"k"`).
    pub fn from_name(name: &str) -> Self {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Key::Character(c);
        }

        match name.to_ascii_lowercase().as_str() {
            "arrowup" | "up" => Key::ArrowUp,
            "arrowdown" | "down" => Key::ArrowDown,
            "arrowleft" | "left" => Key::ArrowLeft,
            "arrowright" | "right" => Key::ArrowRight,
            "tab" => Key::Tab,
            "shift" => Key::Shift,
            "enter" | "return" => Key::Enter,
            "escape" | "esc" => Key::Escape,
            "backspace" => Key::Backspace,
            "space" => Key::Character(' '),
            _ => Key::Other,
        }
    }

    /// Whether this key keeps its default behaviour when a result link has focus.
    pub fn is_link_passthrough(&self) -> bool {
        matches!(self, Key::Tab | Key::Shift | Key::Enter)
    }
}

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    /// Cmd on macOS, Super/Windows elsewhere
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    /// Ctrl or Cmd, whichever the platform treats as the shortcut modifier.
    pub fn primary(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A single key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A press without modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        Self::plain(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("enter"), Key::Enter);
        assert_eq!(Key::from_name("k"), Key::Character('k'));
        assert_eq!(Key::from_name("K"), Key::Character('K'));
        assert_eq!(Key::from_name("F5"), Key::Other);
    }

    #[test]
    fn test_passthrough_keys() {
        assert!(Key::Tab.is_link_passthrough());
        assert!(Key::Shift.is_link_passthrough());
        assert!(Key::Enter.is_link_passthrough());
        assert!(!Key::ArrowDown.is_link_passthrough());
        assert!(!Key::Character('g').is_link_passthrough());
        assert!(!Key::Backspace.is_link_passthrough());
    }

    #[test]
    fn test_primary_modifier() {
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        let meta = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        assert!(ctrl.primary());
        assert!(meta.primary());
        assert!(!Modifiers::NONE.primary());
    }
}
