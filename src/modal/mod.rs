//! Search modal visibility.
//!
//! [`ModalState`] is an explicit, shareable open/closed flag created by the
//! front end and handed to the key listener; [`ModalToggle`] reacts to the
//! toggle hotkey and Escape regardless of whether the modal is open.

pub mod hotkey;
pub mod state;

pub use hotkey::Hotkey;
pub use state::{ModalEvent, ModalState, ModalToggle};
