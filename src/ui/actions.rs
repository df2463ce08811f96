//! Result link actions for the search UI.
//!
//! Result URLs from the admin site are usually relative (`/admin/auth/user/1`)
//! and are resolved against the configured base URL before opening.

use reqwest::Url;

use crate::widget::ResultLink;
use crate::{Result, SearchError};

/// Resolve a result link against the admin site origin.
///
/// Absolute link URLs are returned unchanged.
pub fn resolve_link_url(base: &Url, link: &ResultLink) -> Result<Url> {
    base.join(&link.url)
        .map_err(|e| SearchError::Action(format!("Invalid link URL {:?}: {}", link.url, e)))
}

/// Open a result link in the default browser.
///
/// # Errors
/// Returns error if the URL is invalid or no browser could be launched.
pub fn open_link(base: &Url, link: &ResultLink) -> Result<()> {
    let url = resolve_link_url(base, link)?;
    tracing::info!("Opening result link: {}", url);

    opener::open_browser(url.as_str())
        .map_err(|e| SearchError::Action(format!("Failed to open {}: {}", url, e)))
}
