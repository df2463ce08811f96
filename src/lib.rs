//! Admin site search - a modal search widget for an administrative web interface.
//!
//! This library provides the headless core of the search popup: the search
//! phase state machine, debounced queries against the admin search endpoint,
//! keyboard navigation over result links and the modal toggle. The `ui` module
//! renders it with egui.

pub mod config;
pub mod endpoint;
pub mod keys;
pub mod modal;
pub mod session;
pub mod ui;
pub mod widget;

use thiserror::Error;

/// Search error types covering all failure modes.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Search request failed (transport, HTTP status or malformed JSON)
    #[error("Search request failed: {0}")]
    RequestFailed(String),

    /// Invalid configuration or hotkey binding
    #[error("Configuration error: {0}")]
    Config(String),

    /// Result link could not be resolved or opened
    #[error("Action error: {0}")]
    Action(String),

    /// I/O errors (config file, log directory)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using SearchError
pub type Result<T> = std::result::Result<T, SearchError>;
