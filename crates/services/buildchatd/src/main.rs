//! buildchat daemon (buildchatd)
//!
//! Runs the notification pipeline once for a batch of build reports:
//!
//! - **Check**: load the configuration and print its warnings
//! - **Send**: format every build and post it to the configured webhook
//!
//! Reports are read as a JSON array in the host's report shape, either from a
//! file or from standard input.

mod cli;
mod commands;
mod error;
mod prelude;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{handle_check, handle_send, load_config};
use crate::prelude::*;

/// Main entry point for buildchatd.
///
/// # Examples
///
/// ```bash
/// # Validate a configuration file
/// buildchatd --config notifier.toml check
///
/// # Post the builds of a report file
/// buildchatd --config notifier.toml send --reports reports.json
///
/// # Or pipe reports in
/// cat reports.json | buildchatd --config notifier.toml send
/// ```
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "buildchatd=info,buildchat=info,buildchat_config=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let (config, warnings) = load_config(&cli.config)?;

    match cli.command {
        Commands::Check => handle_check(&config, &warnings),
        Commands::Send { reports } => handle_send(&config, &warnings, reports).await,
    }
}
