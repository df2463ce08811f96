//! Client side of the admin search endpoint.
//!
//! The admin site exposes `GET /admin/search/?q=...` returning JSON. The widget
//! talks to it through the [`ResultsEndpoint`] trait so that tests can script
//! responses without a server.

pub mod client;
pub mod protocol;

pub use client::{HttpEndpoint, ResultsEndpoint};
pub use protocol::*;
