//! Report command implementation

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{generate_audit_report, render_report, ExportFormat};

use super::{load_config, open_expenses};

pub fn cmd_report(
    config: Option<&Path>,
    file: &Path,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let format: ExportFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let expenses = open_expenses(file)?;
    let config = load_config(config)?;
    let report = generate_audit_report(&expenses, &config);
    let rendered = render_report(&report, format).context("Failed to render report")?;

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("📄 Audit report {} written to {}", report.report_id, path.display());
            println!(
                "   Compliance score: {}/100 (risk: {})",
                report.compliance_score, report.risk_level
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
