//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Expense analytics and audit reports
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Expense analytics, anomaly detection and audit reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Audit thresholds file (TOML)
    ///
    /// Defaults to ~/.local/share/tally/config/audit.toml when present,
    /// otherwise the built-in thresholds.
    #[arg(long, global = true, env = "TALLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze an expense file (breakdowns, anomalies, insights)
    Analyze {
        /// Expense file (.csv or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate an audit report
    Report {
        /// Expense file (.csv or .json)
        #[arg(short, long)]
        file: PathBuf,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show dashboard figures
    Dashboard {
        /// Expense file (.csv or .json)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show category and monthly chart series
    Charts {
        /// Expense file (.csv or .json)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Inspect audit thresholds
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Expense file to preload into the ledger
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective thresholds
    Show,

    /// Print the override file location
    Path,
}
