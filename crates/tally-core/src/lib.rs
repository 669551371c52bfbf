//! Tally Core Library
//!
//! Shared functionality for the Tally expense audit tool:
//! - Expense models and an in-memory ledger
//! - CSV and JSON import
//! - Analytics engine: breakdowns, anomalies, insights, recommendations
//! - Audit reports with compliance score and risk level
//! - Dashboard figures and chart series
//! - Report and expense export
//! - Threshold configuration loaded from TOML

pub mod analytics;
pub mod audit;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod import;
pub mod ledger;
pub mod models;

pub use analytics::{
    analyze, AnalyticsEngine, Analysis, Anomaly, AnomalyType, Breakdown, Bucket, Severity,
};
pub use audit::{generate_audit_report, AuditReport, ReportBuilder, RiskLevel};
pub use config::AuditConfig;
pub use dashboard::{CategorySlice, ChartData, DashboardStats, MonthlyPoint};
pub use error::{Error, Result};
pub use export::{export_expenses_csv, render_report, ExportFormat};
pub use import::{load_expenses, parse_csv, parse_json};
pub use ledger::ExpenseLedger;
pub use models::{Category, Expense, ExpenseUpdate, NewExpense};
