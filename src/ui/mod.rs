//! Search UI components for the admin search desktop popup.
//!
//! Provides the egui-based search modal with hotkey toggling, keyboard
//! navigation over result links, and opening results in the browser.

pub mod actions;
pub mod app;
pub mod results;

pub use app::SearchApp;
