//! Admin search CLI - run one search through the search widget.
//!
//! Prints the help text the modal would show and the navigable result links
//! in keyboard order. Exits non-zero when the request fails.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::runtime::Handle;

use admin_search::config::WidgetConfig;
use admin_search::endpoint::HttpEndpoint;
use admin_search::ui::actions;
use admin_search::widget::{Phase, SearchWidget};

/// Search the admin site from the command line.
#[derive(Parser, Debug)]
#[command(name = "admin-search", version, about)]
struct Args {
    /// Text to search for
    query: String,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Admin site origin, overrides the config file
    #[arg(long)]
    base_url: Option<String>,

    /// Minimum characters before searching, overrides the config file
    #[arg(long)]
    min_chars: Option<usize>,

    /// Print the raw result tree as JSON instead of links
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("admin_search=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => WidgetConfig::load_from(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => WidgetConfig::load().context("Failed to load configuration")?,
    };
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(min_chars) = args.min_chars {
        config.min_chars = min_chars;
    }
    config.validate()?;

    let base_url = reqwest::Url::parse(&config.base_url)?;
    let endpoint = HttpEndpoint::new(&config)?;
    let mut widget = SearchWidget::new(endpoint, &config, Handle::current());

    widget.on_input(&args.query);
    widget.settled().await;

    let state = widget.snapshot();
    println!("{}", state.help_text());

    if args.json {
        println!("{}", serde_json::to_string_pretty(state.results())?);
    } else {
        for (index, link) in state.links().iter().enumerate() {
            let url = actions::resolve_link_url(&base_url, link)?;
            println!("{:>3}  {:<48}  {}", index, link.label, url);
        }
    }

    if *state.phase() == Phase::Failed {
        anyhow::bail!("search for {:?} failed", args.query);
    }
    Ok(())
}
