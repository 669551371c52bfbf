//! Audit reports - scoring and assembly on top of an `Analysis`
//!
//! `ReportBuilder::build` adds an id, timestamps, the covered period, summary
//! figures, a 0-100 compliance score and a Low/Medium/High risk level.

pub mod report;
pub mod scoring;

pub use report::{AuditReport, ReportBuilder, ReportPeriod, ReportSummary};
pub use scoring::{compliance_score, pending_ratio, risk_level, RiskLevel};

use crate::analytics::AnalyticsEngine;
use crate::config::AuditConfig;
use crate::models::Expense;

/// Analyze and report in one step with the given thresholds
pub fn generate_audit_report(expenses: &[Expense], config: &AuditConfig) -> AuditReport {
    let analysis = AnalyticsEngine::with_config(config.clone()).analyze(expenses);
    ReportBuilder::with_config(config.clone()).build(&analysis)
}
