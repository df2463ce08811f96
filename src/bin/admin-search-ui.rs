//! Admin search popup - desktop front end for the admin site search.
//!
//! This binary provides the search modal:
//! - Ctrl/Cmd+K (configurable) to open/close the modal, Escape to close
//! - Debounced search-as-you-type against `/admin/search/`
//! - Keyboard navigation (Up/Down, typing returns to the input)
//! - Enter opens the focused result in the browser
//!
//! Logs are written to `<data dir>/logs/admin-search-ui.log`.

use anyhow::Context;
use eframe::egui;
use tracing_appender::non_blocking::WorkerGuard;

use admin_search::config::{self, WidgetConfig};
use admin_search::endpoint::HttpEndpoint;
use admin_search::modal::ModalState;
use admin_search::session::SearchSession;
use admin_search::ui::SearchApp;

/// Main entry point for the admin search popup.
fn main() -> anyhow::Result<()> {
    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging();

    tracing::info!("Admin search UI v{} starting", env!("CARGO_PKG_VERSION"));

    let config = WidgetConfig::load().context("Failed to load configuration")?;
    config.validate()?;
    let base_url = reqwest::Url::parse(&config.base_url).context("Invalid base_url")?;
    tracing::info!("Searching {}", config.search_url()?);

    // Tokio runtime for debounced searches and HTTP requests
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    let endpoint = HttpEndpoint::new(&config)?;
    let session = SearchSession::new(endpoint, &config, ModalState::new(), runtime.handle().clone())?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_title("Admin search"),
        ..Default::default()
    };

    eframe::run_native(
        "Admin search",
        options,
        Box::new(move |cc| Ok(Box::new(SearchApp::new(cc, session, base_url, handle)))),
    )
    .map_err(|e| anyhow::anyhow!("UI failed: {}", e))
}

/// Initialize tracing with a daily rotating file appender, or stderr if the
/// log directory is unavailable.
fn init_logging() -> Option<WorkerGuard> {
    let filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("admin_search=info,admin_search_ui=info"))
    };

    let Some(log_dir) = config::data_dir().map(|dir| dir.join("logs")) else {
        tracing_subscriber::fmt().with_env_filter(filter()).init();
        return None;
    };

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log directory {:?}: {}", log_dir, e);
        tracing_subscriber::fmt().with_env_filter(filter()).init();
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "admin-search-ui.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter())
        .with_ansi(false) // No ANSI colors in log files
        .init();

    tracing::info!("Logging initialized to {:?}", log_dir);
    Some(guard)
}
