//! Integration tests for tally-core
//!
//! These tests exercise the full import → ledger → analyze → report → export workflow.

use std::io::Write;

use chrono::NaiveDate;
use tally_core::{
    analyze, export_expenses_csv, generate_audit_report, load_expenses, parse_csv, render_report,
    AuditConfig, ChartData, DashboardStats, ExpenseLedger, ExpenseUpdate, ExportFormat,
    NewExpense, ReportBuilder, RiskLevel, Severity,
};

/// Sample expense file in the shape the table editor exports
/// - Two Office purchases, one large Equipment outlier
/// - Mixed approved/pending, spanning August and September 2025
fn sample_csv() -> &'static str {
    r#"id,date,item,description,category,cost,status
1,2025-09-08,Office Supplies,Notebooks and pens,Office,45.50,approved
2,2025-09-07,Client Lunch,Lunch with ABC Corp,Meals,89.25,pending
3,2025-08-20,Taxi,Airport transfer,Travel,60.00,approved
4,2025-08-14,Printer Paper,Ten reams,Office,40.00,approved
5,2025-08-02,Standing Desk,Ergonomic desk,Equipment,900.00,pending"#
}

// =============================================================================
// Analysis / Report Workflow
// =============================================================================

#[test]
fn test_full_audit_workflow() {
    let expenses = parse_csv(sample_csv().as_bytes()).expect("Failed to parse CSV");
    assert_eq!(expenses.len(), 5);

    let analysis = analyze(&expenses);
    assert!((analysis.total_expenses - 1134.75).abs() < 1e-9);
    assert_eq!(analysis.category_breakdown.get("Office").unwrap().count, 2);

    // avg 226.95: the desk is above 3x
    assert_eq!(analysis.anomalies.len(), 1);
    assert_eq!(analysis.anomalies[0].expense_id, 5);
    assert_eq!(analysis.anomalies[0].severity, Severity::High);

    let report = ReportBuilder::new().build(&analysis);
    assert_eq!(report.period.from, "2025-08");
    assert_eq!(report.period.to, "2025-09");
    assert_eq!(report.summary.total_transactions, 5);

    // pending 989.25 / 1134.75 > 0.5: all penalties apply
    assert_eq!(report.compliance_score, 40);
    assert_eq!(report.risk_level, RiskLevel::High);

    let text = render_report(&report, ExportFormat::Text).expect("Failed to render");
    assert!(text.contains("Standing Desk"));
    assert!(text.contains("$1134.75"));
}

#[test]
fn test_ledger_edits_change_report() {
    let expenses = parse_csv(sample_csv().as_bytes()).unwrap();
    let mut ledger = ExpenseLedger::from_expenses(expenses);

    // Approve everything pending and drop the outlier
    ledger.remove(5).unwrap();
    ledger
        .update(
            2,
            ExpenseUpdate {
                status: Some("approved".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    let report = generate_audit_report(ledger.list(), &AuditConfig::default());
    assert!(report.anomalies.is_empty());
    assert_eq!(report.summary.pending_amount, 0.0);
    assert_eq!(report.compliance_score, 100);
    assert_eq!(report.risk_level, RiskLevel::Low);

    let added = ledger
        .add(NewExpense {
            cost: 12.0,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(added.id, 5);
    assert_eq!(added.item, "New Item");
}

#[test]
fn test_reports_get_fresh_ids() {
    let expenses = parse_csv(sample_csv().as_bytes()).unwrap();
    let a = generate_audit_report(&expenses, &AuditConfig::default());
    let b = generate_audit_report(&expenses, &AuditConfig::default());

    assert_ne!(a.report_id, b.report_id);
    assert_eq!(a.compliance_score, b.compliance_score);
}

#[test]
fn test_custom_thresholds() {
    let config = AuditConfig::from_toml_str(
        r#"
[anomaly]
medium_multiplier = 5.0
high_multiplier = 10.0

[approvals]
pending_warning_ratio = 0.9
pending_critical_ratio = 0.95
"#,
    )
    .expect("Failed to parse config");

    let expenses = parse_csv(sample_csv().as_bytes()).unwrap();
    let report = generate_audit_report(&expenses, &config);

    // 900 < 5 x 226.95 and pending 87% < 90%
    assert!(report.anomalies.is_empty());
    assert_eq!(report.compliance_score, 100);
    assert_eq!(report.risk_level, RiskLevel::Low);
}

// =============================================================================
// Dashboard / Charts
// =============================================================================

#[test]
fn test_dashboard_and_charts() {
    let expenses = parse_csv(sample_csv().as_bytes()).unwrap();

    let today = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
    let stats = DashboardStats::compute(&expenses, today);
    assert_eq!(stats.total_items, 5);
    assert_eq!(stats.pending_count, 2);
    assert!((stats.this_month - 134.75).abs() < 1e-9);

    let charts = ChartData::compute(&expenses);
    assert_eq!(charts.top_category.as_deref(), Some("Equipment"));
    assert_eq!(charts.category_count, 4);
    assert_eq!(charts.monthly.len(), 2);
    assert_eq!(charts.monthly[1].label, "Aug 25");
}

// =============================================================================
// File Round Trip
// =============================================================================

#[test]
fn test_export_then_load_from_disk() {
    let expenses = parse_csv(sample_csv().as_bytes()).unwrap();
    let csv = export_expenses_csv(&expenses).unwrap();

    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(csv.as_bytes()).unwrap();
    file.flush().unwrap();

    let loaded = load_expenses(file.path()).expect("Failed to load");
    assert_eq!(loaded, expenses);
}

#[test]
fn test_load_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[{{"date":"2025-09-01","item":"Pens","category":"Office","cost":3.5,"status":"approved"}}]"#
    )
    .unwrap();
    file.flush().unwrap();

    let loaded = load_expenses(file.path()).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 1);
}

#[test]
fn test_load_rejects_duplicate_ids() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "id,date,item,category,cost,status").unwrap();
    writeln!(file, "1,2025-09-01,Pens,Office,3.5,approved").unwrap();
    writeln!(file, "1,2025-09-02,Paper,Office,4.0,approved").unwrap();
    file.flush().unwrap();

    // A ledger seeded from this file could not tell the two rows apart
    let err = load_expenses(file.path()).unwrap_err();
    assert!(err.to_string().contains("duplicate id 1"));
}
