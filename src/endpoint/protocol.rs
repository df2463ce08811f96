//! Search endpoint response types.
//!
//! The endpoint answers with `{ results: { apps: [...] }, counts: {...}, errors: [...] }`.
//! Apps contain models, models contain matched objects.

use serde::{Deserialize, Serialize};

/// Response body of the search endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResponse {
    /// Matched apps, models and objects
    pub results: ResultSet,
    /// Number of matched apps, models and objects
    pub counts: Counts,
    /// Per-model failures, only reported by servers running in debug mode
    #[serde(default)]
    pub errors: Vec<BackendError>,
}

/// Tree of matched results. The empty set is `{ apps: [] }`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub apps: Vec<AppResult>,
}

impl ResultSet {
    /// The empty result set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

/// A matched application.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppResult {
    /// App label
    pub id: String,
    /// Display name
    pub name: String,
    /// Admin index URL; absent when the user lacks module permissions
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub models: Vec<ModelResult>,
}

/// A matched model, either by name/field or because some objects matched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ModelResult {
    /// `app_label.ObjectName`
    pub id: String,
    /// Verbose plural name
    pub name: String,
    /// Changelist URL
    pub url: String,
    /// Add form URL; absent when the user cannot add
    #[serde(default)]
    pub url_add: Option<String>,
    #[serde(default)]
    pub objects: Vec<ObjectResult>,
}

/// A matched model instance.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ObjectResult {
    /// Primary key as a string
    pub id: String,
    /// String representation of the instance
    pub name: String,
    /// Change form URL
    pub url: String,
}

/// Result counts used for the summary help text.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub apps: u64,
    pub models: u64,
    pub objects: u64,
}

impl Counts {
    pub fn new(apps: u64, models: u64, objects: u64) -> Self {
        Self {
            apps,
            models,
            objects,
        }
    }

    /// Whether anything matched at all.
    pub fn any(&self) -> bool {
        self.apps > 0 || self.models > 0 || self.objects > 0
    }
}

/// Diagnostic for a model the backend skipped while searching.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    /// Exception representation
    pub error: String,
    pub error_message: String,
    pub app: String,
    pub model: String,
}
