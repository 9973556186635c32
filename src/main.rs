//! SPICE - a terminal rendition of a dating app client
//!
//! This is the binary entry point. All logic lives in the workspace
//! crates.

use std::path::PathBuf;

use clap::Parser;

/// SPICE - swipe, match and chat from your terminal
#[derive(Parser, Debug)]
#[command(name = "spice")]
#[command(about = "A terminal rendition of the SPICE dating app client", long_about = None)]
struct Args {
    /// Path to a settings file (default: <config_dir>/spice/config.toml)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Override the simulated login delay in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    spice_core::logging::init()?;

    let args = Args::parse();

    let mut settings = spice_app::config::load_settings(args.settings.as_deref())?;
    if let Some(delay) = args.delay_ms {
        settings.login_delay_ms = delay;
    }
    tracing::info!(delay_ms = settings.login_delay_ms, "starting TUI");

    spice_tui::run(settings).await?;
    Ok(())
}
