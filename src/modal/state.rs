//! Modal open/closed state and the key listener that drives it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::keys::{Key, KeyPress};
use crate::modal::hotkey::Hotkey;

/// Shared open/closed flag for the search modal.
///
/// Cloning yields another handle to the same flag. The key listener is the
/// only writer; renderers read it.
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    open: Arc<AtomicBool>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    pub fn open(&self) {
        self.open.store(true, Ordering::SeqCst);
    }

    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    /// Flip the flag and return the new value.
    pub fn toggle(&self) -> bool {
        !self.open.fetch_xor(true, Ordering::SeqCst)
    }
}

/// Visibility change caused by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Opened,
    Closed,
}

/// Key listener for the modal: the hotkey toggles, Escape closes.
///
/// Always active, whether or not the modal is currently open.
#[derive(Debug, Clone)]
pub struct ModalToggle {
    hotkey: Hotkey,
    modal: ModalState,
}

impl ModalToggle {
    pub fn new(hotkey: Hotkey, modal: ModalState) -> Self {
        Self { hotkey, modal }
    }

    pub fn hotkey(&self) -> &Hotkey {
        &self.hotkey
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Handle a key press, returning the visibility change it caused, if any.
    pub fn on_key(&self, press: &KeyPress) -> Option<ModalEvent> {
        if self.hotkey.matches(press) {
            let event = if self.modal.toggle() {
                ModalEvent::Opened
            } else {
                ModalEvent::Closed
            };
            tracing::debug!("Search modal toggled: {:?}", event);
            return Some(event);
        }

        if press.key == Key::Escape && self.modal.is_open() {
            self.modal.close();
            tracing::debug!("Search modal closed with Escape");
            return Some(ModalEvent::Closed);
        }

        None
    }
}
