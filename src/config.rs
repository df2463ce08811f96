//! Widget configuration loading.
//!
//! Configuration lives in `config.toml` under the platform config directory.
//! Every key is optional; missing keys fall back to the defaults below.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use reqwest::Url;
use serde::Deserialize;

use crate::modal::Hotkey;
use crate::{Result, SearchError};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Search widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    /// Admin site origin, e.g. `http://localhost:8000`
    pub base_url: String,
    /// Path of the search endpoint relative to `base_url`
    pub search_path: String,
    /// Minimum number of characters before a search is issued
    pub min_chars: usize,
    /// Quiet period after the last keystroke before searching
    pub debounce_ms: u64,
    /// Timeout for a single search request
    pub request_timeout_ms: u64,
    /// Binding that toggles the modal (e.g. `Primary+K`)
    pub hotkey: String,
    /// Whether closing the modal resets the input and results
    pub reset_on_close: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            search_path: "/admin/search/".to_string(),
            min_chars: 2,
            debounce_ms: 250,
            request_timeout_ms: 10_000,
            hotkey: "Primary+K".to_string(),
            reset_on_close: true,
        }
    }
}

impl WidgetConfig {
    /// Load configuration from the platform config directory or return defaults.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load() -> Result<Self> {
        match config_dir() {
            Some(dir) => {
                let path = dir.join(CONFIG_FILE_NAME);
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    tracing::debug!("No config file at {:?}, using defaults", path);
                    Ok(Self::default())
                }
            }
            None => Ok(Self::default()),
        }
    }

    /// Load and validate configuration from an explicit TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text).map_err(|e| {
            SearchError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;
        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Check value ranges and that the URL and hotkey parse.
    pub fn validate(&self) -> Result<()> {
        if self.min_chars == 0 {
            return Err(SearchError::Config("min_chars must be at least 1".into()));
        }
        if self.request_timeout_ms == 0 {
            return Err(SearchError::Config(
                "request_timeout_ms must be greater than 0".into(),
            ));
        }
        self.search_url()?;
        self.parsed_hotkey()?;
        Ok(())
    }

    /// Full URL of the search endpoint.
    pub fn search_url(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url).map_err(|e| {
            SearchError::Config(format!("Invalid base_url {:?}: {}", self.base_url, e))
        })?;
        base.join(&self.search_path).map_err(|e| {
            SearchError::Config(format!("Invalid search_path {:?}: {}", self.search_path, e))
        })
    }

    pub fn parsed_hotkey(&self) -> Result<Hotkey> {
        self.hotkey.parse()
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "admin-search")
}

/// Platform config directory (e.g. `~/.config/admin-search`).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Platform data directory, used for log files.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}
