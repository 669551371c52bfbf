//! Config command implementations (show, path)

use std::path::Path;

use anyhow::Result;
use tally_core::config::default_config_path;

use super::load_config;

pub fn cmd_config_show(config: Option<&Path>) -> Result<()> {
    let cfg = load_config(config)?;

    println!();
    println!("⚙️  Audit Thresholds");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Anomaly (medium):         cost > {:.2} x average", cfg.anomaly_medium_multiplier);
    println!("   Anomaly (high):           cost > {:.2} x average", cfg.anomaly_high_multiplier);
    println!("   Pending warning ratio:    {:.0}%", cfg.pending_warning_ratio * 100.0);
    println!("   Pending critical ratio:   {:.0}%", cfg.pending_critical_ratio * 100.0);
    println!("   Budget concentration:     {:.0}%", cfg.concentration_ratio * 100.0);
    println!();
    println!("   Penalty per anomaly:      {}", cfg.anomaly_penalty);
    println!("   Pending warning penalty:  {}", cfg.pending_warning_penalty);
    println!("   Pending critical penalty: {}", cfg.pending_critical_penalty);
    println!("   High risk above:          {} anomalies", cfg.high_risk_anomaly_count);
    println!();

    Ok(())
}

pub fn cmd_config_path(config: Option<&Path>) -> Result<()> {
    match config {
        Some(path) => println!("{} (from --config)", path.display()),
        None => match default_config_path() {
            Some(path) if path.exists() => println!("{}", path.display()),
            Some(path) => println!("{} (not present, using built-in defaults)", path.display()),
            None => println!("No data directory available, using built-in defaults"),
        },
    }
    Ok(())
}
