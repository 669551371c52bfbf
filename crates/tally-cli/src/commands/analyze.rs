//! Analyze command implementation

use std::path::Path;

use anyhow::Result;
use tally_core::analytics::{format_currency, Breakdown};
use tally_core::AnalyticsEngine;

use super::{load_config, open_expenses, truncate};

pub fn cmd_analyze(config: Option<&Path>, file: &Path, json: bool) -> Result<()> {
    let expenses = open_expenses(file)?;
    let engine = AnalyticsEngine::with_config(load_config(config)?);
    let analysis = engine.analyze(&expenses);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!();
    println!("📊 Expense Analysis");
    println!("   File: {}", file.display());
    println!("   ─────────────────────────────────────────────────────────────");

    if expenses.is_empty() {
        println!("   No expenses found.");
        return Ok(());
    }

    println!(
        "   Total: {} across {} expenses",
        format_currency(analysis.total_expenses),
        expenses.len()
    );

    print_breakdown("Category", &analysis.category_breakdown, analysis.total_expenses);
    print_breakdown("Status", &analysis.status_breakdown, analysis.total_expenses);
    print_breakdown("Month", &analysis.time_analysis, analysis.total_expenses);

    println!();
    if analysis.anomalies.is_empty() {
        println!("   ✅ No anomalies detected");
    } else {
        println!("   ⚠️  Anomalies ({})", analysis.anomalies.len());
        for anomaly in &analysis.anomalies {
            println!(
                "      #{:<4} {:28} {:>12}  {}",
                anomaly.expense_id,
                truncate(&anomaly.item, 28),
                format_currency(anomaly.cost),
                anomaly.severity
            );
        }
    }

    if !analysis.insights.is_empty() {
        println!();
        println!("   💡 Insights");
        for insight in &analysis.insights {
            println!("      • {}", insight);
        }
    }

    if !analysis.recommendations.is_empty() {
        println!();
        println!("   📋 Recommendations");
        for rec in &analysis.recommendations {
            println!("      • {}", rec);
        }
    }

    println!();
    Ok(())
}

/// Print one breakdown as a table with share of total
fn print_breakdown(label: &str, breakdown: &Breakdown, total: f64) {
    println!();
    println!(
        "   {:20} │ {:>12} │ {:>6} │ {:>5}",
        label, "Amount", "%", "Count"
    );
    println!("   ─────────────────────┼──────────────┼────────┼───────");
    for (key, bucket) in breakdown.iter() {
        let pct = if total > 0.0 {
            bucket.total / total * 100.0
        } else {
            0.0
        };
        println!(
            "   {:20} │ {:>12.2} │ {:>5.1}% │ {:>5}",
            truncate(key, 20),
            bucket.total,
            pct,
            bucket.count
        );
    }
}
