//! Hotkey binding that toggles the search modal.
//!
//! Bindings are written as `Modifier+...+Key`, e.g. `Primary+K` (Ctrl or Cmd
//! plus K, the default) or `Ctrl+Shift+F`.

use std::fmt;
use std::str::FromStr;

use crate::keys::{Key, KeyPress};
use crate::SearchError;

/// A parsed hotkey binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    /// Ctrl or Cmd
    pub primary: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
    pub key: Key,
}

impl Default for Hotkey {
    /// Primary+K
    fn default() -> Self {
        Self {
            primary: true,
            ctrl: false,
            meta: false,
            shift: false,
            alt: false,
            key: Key::Character('k'),
        }
    }
}

impl Hotkey {
    /// Whether `press` triggers this binding.
    ///
    /// Every modifier named in the binding must be held; extra modifiers are
    /// ignored. Character keys compare case-insensitively since Shift changes
    /// the reported character.
    pub fn matches(&self, press: &KeyPress) -> bool {
        let m = press.modifiers;
        if (self.primary && !m.primary())
            || (self.ctrl && !m.ctrl)
            || (self.meta && !m.meta)
            || (self.shift && !m.shift)
            || (self.alt && !m.alt)
        {
            return false;
        }

        match (self.key, press.key) {
            (Key::Character(a), Key::Character(b)) => a.to_lowercase().eq(b.to_lowercase()),
            (a, b) => a == b,
        }
    }

    fn has_modifier(&self) -> bool {
        self.primary || self.ctrl || self.meta || self.shift || self.alt
    }
}

impl FromStr for Hotkey {
    type Err = SearchError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = input.split('+').map(str::trim).collect();
        if parts.len() < 2 || parts.iter().any(|p| p.is_empty()) {
            return Err(SearchError::Config(format!(
                "Invalid hotkey {:?}: expected Modifier+Key",
                input
            )));
        }

        let mut hotkey = Hotkey {
            primary: false,
            key: Key::Other,
            ..Hotkey::default()
        };

        for modifier in &parts[..parts.len() - 1] {
            match modifier.to_ascii_lowercase().as_str() {
                "primary" | "mod" => hotkey.primary = true,
                "ctrl" | "control" => hotkey.ctrl = true,
                "cmd" | "meta" | "super" => hotkey.meta = true,
                "shift" => hotkey.shift = true,
                "alt" | "option" => hotkey.alt = true,
                other => {
                    return Err(SearchError::Config(format!(
                        "Invalid hotkey {:?}: unknown modifier {:?}",
                        input, other
                    )))
                }
            }
        }

        let key_name = parts[parts.len() - 1];
        hotkey.key = match Key::from_name(key_name) {
            Key::Character(c) => Key::Character(c.to_ascii_lowercase()),
            Key::Other => {
                return Err(SearchError::Config(format!(
                    "Invalid hotkey {:?}: unknown key {:?}",
                    input, key_name
                )))
            }
            // modifiers never fire alone, the rest belong to result navigation
            Key::Shift
            | Key::Tab
            | Key::Enter
            | Key::Escape
            | Key::ArrowUp
            | Key::ArrowDown
            | Key::ArrowLeft
            | Key::ArrowRight => {
                return Err(SearchError::Config(format!(
                    "Invalid hotkey {:?}: {:?} cannot be bound",
                    input, key_name
                )))
            }
            key => key,
        };

        if !hotkey.has_modifier() {
            return Err(SearchError::Config(format!(
                "Invalid hotkey {:?}: at least one modifier is required",
                input
            )));
        }

        Ok(hotkey)
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.primary, "Primary"),
            (self.ctrl, "Ctrl"),
            (self.meta, "Cmd"),
            (self.shift, "Shift"),
            (self.alt, "Alt"),
        ];
        for (_, name) in flags.iter().filter(|(set, _)| *set) {
            write!(f, "{}+", name)?;
        }
        match self.key {
            Key::Character(c) => write!(f, "{}", c.to_ascii_uppercase()),
            key => write!(f, "{:?}", key),
        }
    }
}
