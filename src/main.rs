//! Lunar Console - terminal dashboard for Lunar serverless functions
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use lunar_api::ApiClient;
use lunar_app::config::{load_settings, Overrides};
use lunar_app::Route;
use lunar_core::prelude::*;

/// Lunar Console - manage serverless functions from the terminal
#[derive(Parser, Debug)]
#[command(name = "lunar")]
#[command(about = "Terminal console for Lunar serverless functions", long_about = None)]
struct Args {
    /// Backend base URL (overrides config file and LUNAR_URL)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Log in with this key at startup (overrides LUNAR_API_KEY)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Screen to open, e.g. /functions/abc/versions
    #[arg(long, value_name = "PATH", default_value = "/functions")]
    route: String,

    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    lunar_core::logging::init().context("Failed to initialize logging")?;

    let route = Route::parse(&args.route).ok_or_else(|| Error::unknown_route(&args.route))?;

    let mut settings = load_settings(args.config.as_deref()).with_context(|| match &args.config {
        Some(path) => format!("Failed to load settings from {}", path.display()),
        None => "Failed to load settings".to_string(),
    })?;
    settings.apply(&Overrides {
        base_url: args.url,
        api_key: args.api_key,
    });
    let settings = settings.validated();
    info!("Backend: {}", settings.server.base_url);

    let client = ApiClient::new(&settings.server.base_url).context("Failed to create API client")?;
    let api_key = settings.server.api_key.clone();
    lunar_tui::run(settings, client, route, api_key).await
}
