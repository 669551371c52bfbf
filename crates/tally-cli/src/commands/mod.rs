//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Expense analysis (breakdowns, anomalies, insights)
//! - `config` - Audit threshold inspection (show, path)
//! - `core` - Shared utilities (open_expenses, load_config)
//! - `dashboard` - Dashboard figures and chart series
//! - `reports` - Audit report generation
//! - `serve` - Web server command

pub mod analyze;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod reports;
pub mod serve;

// Re-export command functions for main.rs
pub use analyze::*;
pub use config::*;
pub use core::*;
pub use dashboard::*;
pub use reports::*;
pub use serve::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
