//! Export functionality for audit reports and expense lists
//!
//! Supports:
//! - Audit report rendering as a plain-text document or JSON
//! - Expense list CSV export in the shape `import::parse_csv` reads

use std::fmt;
use std::str::FromStr;

use crate::analytics::{format_currency, Breakdown};
use crate::audit::AuditReport;
use crate::error::{Error, Result};
use crate::models::Expense;

/// Width of the rule lines in the text report
const RULE_WIDTH: usize = 60;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    /// MIME type for HTTP responses
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown export format: {} (expected text or json)", s)),
        }
    }
}

/// Render an audit report in the given format
pub fn render_report(report: &AuditReport, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ExportFormat::Text => Ok(render_text(report)),
    }
}

fn render_text(report: &AuditReport) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    out.push_str(&format!("{}\n", rule));
    out.push_str("EXPENSE AUDIT REPORT\n");
    out.push_str(&format!("{}\n\n", rule));

    out.push_str(&format!("Report ID:   {}\n", report.report_id));
    out.push_str(&format!("Generated:   {}\n", report.generated_date));
    let period = if report.period.from.is_empty() {
        "n/a".to_string()
    } else {
        format!("{} to {}", report.period.from, report.period.to)
    };
    out.push_str(&format!("Period:      {}\n", period));

    section(&mut out, "SUMMARY");
    let summary = &report.summary;
    out.push_str(&format!(
        "  Total Expenses:     {:>14}\n",
        format_currency(summary.total_expenses)
    ));
    out.push_str(&format!(
        "  Transactions:       {:>14}\n",
        summary.total_transactions
    ));
    out.push_str(&format!(
        "  Pending Amount:     {:>14}\n",
        format_currency(summary.pending_amount)
    ));
    out.push_str(&format!(
        "  Average Expense:    {:>14}\n",
        format_currency(summary.average_expense)
    ));

    section(&mut out, "CATEGORY BREAKDOWN");
    breakdown_table(&mut out, &report.category_breakdown);

    section(&mut out, "STATUS BREAKDOWN");
    breakdown_table(&mut out, &report.status_breakdown);

    section(&mut out, "MONTHLY TREND");
    breakdown_table(&mut out, &report.time_analysis);

    section(&mut out, "ANOMALIES");
    if report.anomalies.is_empty() {
        out.push_str("  None detected\n");
    }
    for anomaly in &report.anomalies {
        out.push_str(&format!(
            "  #{:<5} {:<28} {:>12}  {} ({})\n",
            anomaly.expense_id,
            anomaly.item,
            format_currency(anomaly.cost),
            anomaly.anomaly_type,
            anomaly.severity
        ));
    }

    section(&mut out, "INSIGHTS");
    bullet_list(&mut out, &report.insights);

    section(&mut out, "RECOMMENDATIONS");
    bullet_list(&mut out, &report.recommendations);

    section(&mut out, "COMPLIANCE");
    out.push_str(&format!("  Score:       {}/100\n", report.compliance_score));
    out.push_str(&format!("  Risk Level:  {}\n", report.risk_level));
    out.push_str(&format!("\n{}\n", rule));

    out
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("\n{}\n{}\n", title, "-".repeat(title.len())));
}

fn breakdown_table(out: &mut String, breakdown: &Breakdown) {
    if breakdown.is_empty() {
        out.push_str("  (none)\n");
        return;
    }
    for (key, bucket) in breakdown.iter() {
        out.push_str(&format!(
            "  {:<20} {:>14}  {:>4} item{}\n",
            key,
            format_currency(bucket.total),
            bucket.count,
            if bucket.count == 1 { "" } else { "s" }
        ));
    }
}

fn bullet_list(out: &mut String, lines: &[String]) {
    if lines.is_empty() {
        out.push_str("  None\n");
    }
    for line in lines {
        out.push_str(&format!("  - {}\n", line));
    }
}

/// Export expenses to CSV with an `id,date,item,description,category,cost,status` header
pub fn export_expenses_csv(expenses: &[Expense]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    if expenses.is_empty() {
        wtr.write_record(["id", "date", "item", "description", "category", "cost", "status"])?;
    }
    for expense in expenses {
        wtr.serialize(expense)?;
    }

    let bytes = wtr.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidData(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::analyze;
    use crate::audit::ReportBuilder;
    use crate::import::parse_csv;

    fn expense(id: i64, item: &str, category: &str, cost: f64, status: &str) -> Expense {
        Expense {
            id,
            date: "2025-09-08".to_string(),
            item: item.to_string(),
            description: "Notes, with a comma".to_string(),
            category: category.to_string(),
            cost,
            status: status.to_string(),
        }
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(1, "Pens", "Office", 10.0, "approved"),
            expense(2, "Paper", "Office", 10.0, "approved"),
            expense(3, "Lunch", "Meals", 10.0, "approved"),
            expense(4, "Laptop", "Equipment", 100.0, "pending"),
        ]
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("TXT".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert!("pdf".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::default(), ExportFormat::Text);
    }

    #[test]
    fn test_render_text() {
        let report = ReportBuilder::new().build(&analyze(&sample()));
        let text = render_report(&report, ExportFormat::Text).unwrap();

        assert!(text.contains("EXPENSE AUDIT REPORT"));
        assert!(text.contains(&report.report_id));
        assert!(text.contains("Period:      2025-09 to 2025-09"));
        assert!(text.contains("$130.00"));
        assert!(text.contains("#4"));
        assert!(text.contains("High Cost (High)"));
        assert!(text.contains(&format!("Score:       {}/100", report.compliance_score)));
        assert!(text.contains("Risk Level:  High"));
    }

    #[test]
    fn test_render_text_empty() {
        let report = ReportBuilder::new().build(&analyze(&[]));
        let text = render_report(&report, ExportFormat::Text).unwrap();

        assert!(text.contains("Period:      n/a"));
        assert!(text.contains("None detected"));
        assert!(text.contains("Score:       100/100"));
        assert!(text.contains("Risk Level:  Low"));
    }

    #[test]
    fn test_render_json() {
        let report = ReportBuilder::new().build(&analyze(&sample()));
        let json = render_report(&report, ExportFormat::Json).unwrap();

        let parsed: AuditReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.report_id, report.report_id);
        assert_eq!(parsed.category_breakdown, report.category_breakdown);
    }

    #[test]
    fn test_export_csv_reads_back() {
        let csv = export_expenses_csv(&sample()).unwrap();
        assert!(csv.starts_with("id,date,item,description,category,cost,status\n"));

        let parsed = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_export_csv_empty() {
        let csv = export_expenses_csv(&[]).unwrap();
        assert_eq!(csv, "id,date,item,description,category,cost,status\n");
    }
}
