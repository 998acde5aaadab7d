//! usbtop
//!
//! Live terminal dashboard over the host's USB bus: polls the
//! enumeration command on a fixed interval, classifies devices in
//! firmware-update (DFU) mode, and renders a filterable table.

mod config;
mod tui;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use usbtop_core::source::DEFAULT_COMMAND;
use usbtop_core::{EnumerationSource, setup_logging};

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "usbtop")]
#[command(author, version, about = "usbtop - live USB device dashboard")]
#[command(long_about = "
A live terminal dashboard over the host's USB bus. Repeatedly runs the
enumeration command, highlights devices in firmware-update (DFU) mode,
and lets you filter down to them with a single key.

EXAMPLES:
    # Run with defaults (lsusb, 500ms refresh)
    usbtop

    # Slow the refresh down
    usbtop --interval 1000

    # Point at a different enumeration command
    usbtop --command /usr/local/bin/lsusb

    # Run with debug logging on stderr
    usbtop --log-level debug 2>usbtop.log

KEYS:
    f    toggle the DFU-only filter (persisted)
    r    refresh immediately
    q    quit
")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Save default configuration to the default location and exit
    #[arg(long)]
    save_config: bool,

    /// Enumeration command to invoke (no arguments are passed)
    #[arg(long, value_name = "NAME", default_value = DEFAULT_COMMAND)]
    command: String,

    /// Refresh interval in milliseconds (clamped to 200..=1000)
    #[arg(short, long, value_name = "MS", default_value_t = 500)]
    interval: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Handle --save-config early, before taking over the terminal
    if args.save_config {
        let config = Config::default();
        let path = Config::default_path();
        config.save(&path).context("Failed to save configuration")?;
        println!("Configuration saved to: {}", path.display());
        return Ok(());
    }

    setup_logging(&args.log_level).context("Failed to setup logging")?;

    let config_path = args.config.unwrap_or_else(Config::default_path);
    let config = Config::load_or_default(&config_path);

    info!("usbtop v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Config: {} (filterDFU={})",
        config_path.display(),
        config.filter_dfu
    );

    let source = EnumerationSource::new(args.command);
    let interval = Duration::from_millis(args.interval);

    tui::run(config, config_path, source, interval).await
}
