//! Shared utilities for command implementations
//!
//! - `open_expenses` - Load an expense file with CLI-friendly errors
//! - `load_config` - Resolve audit thresholds for `--config`

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{load_expenses, AuditConfig, Expense};

/// Load expenses from a .csv or .json file
pub fn open_expenses(file: &Path) -> Result<Vec<Expense>> {
    let expenses = load_expenses(file)
        .with_context(|| format!("Failed to load expenses from {}", file.display()))?;
    tracing::debug!(count = expenses.len(), "Loaded expenses");
    Ok(expenses)
}

/// Resolve audit thresholds (explicit path, data-dir override, built-in)
pub fn load_config(config: Option<&Path>) -> Result<AuditConfig> {
    AuditConfig::load(config).context("Failed to load audit config")
}
