//! Tally CLI - Expense analytics and audit reports
//!
//! Usage:
//!   tally analyze --file expenses.csv     Breakdowns, anomalies, insights
//!   tally report --file expenses.csv      Audit report (text or json)
//!   tally dashboard --file expenses.csv   Dashboard figures
//!   tally serve --port 3000               Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Analyze { file, json } => commands::cmd_analyze(config, &file, json),
        Commands::Report {
            file,
            format,
            output,
        } => commands::cmd_report(config, &file, &format, output.as_deref()),
        Commands::Dashboard { file } => commands::cmd_dashboard(&file),
        Commands::Charts { file } => commands::cmd_charts(&file),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::cmd_config_show(config),
            ConfigAction::Path => commands::cmd_config_path(config),
        },
        Commands::Serve { port, host, seed } => {
            commands::cmd_serve(config, &host, port, seed.as_deref()).await
        }
    }
}
