//! Command-line interface for buildchatd.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for buildchatd.
#[derive(Parser)]
#[command(name = "buildchatd")]
#[command(about = "buildchat - Post build reports to a chat webhook")]
pub struct Cli {
    /// Path to the notifier configuration file
    #[arg(short, long)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for buildchatd.
#[derive(Subcommand)]
pub enum Commands {
    /// Load the configuration and print its warnings
    Check,
    /// Format and deliver every build of a batch of reports
    Send {
        /// JSON file with an array of reports, standard input when omitted
        #[arg(short, long)]
        reports: Option<PathBuf>,
    },
}
