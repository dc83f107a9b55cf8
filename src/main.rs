//! parceltrack - a terminal client for delivery tracking
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

use parceltrack_app::config;

/// parceltrack - a terminal client for delivery tracking
#[derive(Parser, Debug)]
#[command(name = "ptrack")]
#[command(about = "A terminal client for delivery tracking", long_about = None)]
struct Args {
    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Alternate config file path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    parceltrack_core::logging::init()?;

    let args = Args::parse();
    let mut settings = config::load_settings(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        settings.api.base_url = base_url;
    }
    tracing::info!("backend base url: {}", settings.api.base_url);

    parceltrack_tui::run(settings).await?;
    Ok(())
}
