//! The search widget: phase state machine, debounced searching and keyboard
//! navigation over result links.

pub mod controller;
pub mod navigation;
pub mod phase;
pub mod state;

pub use controller::SearchWidget;
pub use navigation::{Focus, KeyOutcome, LinkKind, LinkTarget, ResultLink, ResultLinks};
pub use phase::{pluralise, Phase};
pub use state::SearchState;
