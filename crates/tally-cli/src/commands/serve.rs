//! Server command implementation

use std::path::Path;

use anyhow::Result;
use tally_core::ExpenseLedger;

use super::{load_config, open_expenses};

pub async fn cmd_serve(
    config: Option<&Path>,
    host: &str,
    port: u16,
    seed: Option<&Path>,
) -> Result<()> {
    let audit = load_config(config)?;
    let ledger = match seed {
        Some(file) => ExpenseLedger::from_expenses(open_expenses(file)?),
        None => ExpenseLedger::new(),
    };

    println!("🚀 Starting Tally web server...");
    println!("   Listening: http://{}:{}", host, port);
    match seed {
        Some(file) => println!("   Seeded {} expenses from {}", ledger.len(), file.display()),
        None => println!("   Ledger: empty (use --seed FILE to preload)"),
    }
    println!();
    println!("   ⚠️  No authentication - do not expose to network!");
    println!("   Press Ctrl+C to stop");

    tally_server::serve(ledger, audit, host, port).await?;

    Ok(())
}
