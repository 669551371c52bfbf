//! Dashboard and chart command implementations

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use tally_core::analytics::format_currency;
use tally_core::{ChartData, DashboardStats};

use super::{open_expenses, truncate};

/// Width of the bars in `tally charts`
const BAR_WIDTH: usize = 30;

pub fn cmd_dashboard(file: &Path) -> Result<()> {
    let expenses = open_expenses(file)?;
    let stats = DashboardStats::compute(&expenses, Local::now().date_naive());

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│          💰 Tally Dashboard             │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Total Expenses:  {}", format_currency(stats.total_expenses));
    println!("  Total Items:     {}", stats.total_items);
    println!("  This Month:      {}", format_currency(stats.this_month));
    println!();
    println!("  ⏳ Pending Approvals: {}", stats.pending_count);
    println!("     Pending Amount: {}", format_currency(stats.pending_amount));
    println!();

    if stats.pending_count > 0 {
        println!("  Run 'tally report --file {}' for the audit.", file.display());
    }

    Ok(())
}

pub fn cmd_charts(file: &Path) -> Result<()> {
    let expenses = open_expenses(file)?;
    let charts = ChartData::compute(&expenses);

    if charts.categories.is_empty() {
        println!("No expenses to chart.");
        return Ok(());
    }

    println!();
    println!("📊 Expenses by Category");
    println!("   ─────────────────────────────────────────────────────────────");
    for slice in &charts.categories {
        println!(
            "   {:12} {:<width$} {:>12} {:>5.1}%",
            truncate(&slice.category, 12),
            bar(slice.bar_pct),
            format_currency(slice.amount),
            slice.share_pct,
            width = BAR_WIDTH
        );
    }

    println!();
    println!("📈 Monthly Trend");
    println!("   ─────────────────────────────────────────────────────────────");
    for point in &charts.monthly {
        println!(
            "   {:12} {:<width$} {:>12}",
            point.label,
            bar(point.bar_pct),
            format_currency(point.amount),
            width = BAR_WIDTH
        );
    }

    println!();
    println!("   Total:       {}", format_currency(charts.total));
    println!("   Average:     {}", format_currency(charts.average));
    println!(
        "   Top:         {}",
        charts.top_category.as_deref().unwrap_or("-")
    );
    println!("   Categories:  {}", charts.category_count);
    println!();

    Ok(())
}

/// Render a percentage as a bar of `BAR_WIDTH` cells
fn bar(pct: f64) -> String {
    let cells = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(cells.min(BAR_WIDTH))
}
