//! Command handlers for buildchatd.

use std::path::{Path, PathBuf};

use buildchat::{BuildReport, Notifier};
use buildchat_config::{ConfigWarning, NotifierConfig, log_warnings};
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::prelude::*;

/// Loads the configuration file.
pub fn load_config(path: &Path) -> Result<(NotifierConfig, Vec<ConfigWarning>)> {
    info!("Loading configuration {:?}", path);
    Ok(NotifierConfig::from_file(path)?)
}

/// Handles the check command by printing the configuration and its warnings.
pub fn handle_check(config: &NotifierConfig, warnings: &[ConfigWarning]) -> Result<()> {
    println!("Configuration parsed successfully");
    println!("Endpoint: {}", config.endpoint);
    println!("Channel: {}", config.channel.as_deref().unwrap_or("-"));
    println!("Username: {}", config.username.as_deref().unwrap_or("-"));
    println!("Format: {:?}", config.format);
    println!("Verbose: {}", config.verbose);

    if warnings.is_empty() {
        println!("No warnings");
    }
    for warning in warnings {
        println!("warning: {warning}");
    }
    Ok(())
}

/// Parses a JSON array of reports.
pub fn parse_reports(contents: &str) -> Result<Vec<BuildReport>> {
    Ok(serde_json::from_str(contents)?)
}

async fn read_reports(path: Option<PathBuf>) -> Result<Vec<BuildReport>> {
    let contents = match path {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut contents = String::new();
            tokio::io::stdin().read_to_string(&mut contents).await?;
            contents
        }
    };
    parse_reports(&contents)
}

/// Handles the send command by running the pipeline once.
///
/// Per-build failures are only logged; the command fails only when the
/// configuration or the reports cannot be read.
pub async fn handle_send(
    config: &NotifierConfig,
    warnings: &[ConfigWarning],
    reports: Option<PathBuf>,
) -> Result<()> {
    log_warnings(warnings);

    let notifier = Notifier::from_config(config)?;
    let reports = read_reports(reports).await?;
    info!("Sending {} report(s) to {}", reports.len(), config.endpoint);

    let summary = notifier.send_message(&reports).await;
    info!(
        "Delivered {} of {} build(s): {} rejected, {} unreachable, {} malformed",
        summary.delivered,
        summary.total(),
        summary.rejected,
        summary.transport_failed,
        summary.format_failed
    );
    Ok(())
}
