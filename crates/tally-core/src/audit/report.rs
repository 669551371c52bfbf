//! Audit report assembly

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::scoring::{compliance_score, pending_ratio, risk_level, RiskLevel};
use crate::analytics::{Analysis, Anomaly, Breakdown};
use crate::config::AuditConfig;

/// Report period info (inclusive month keys)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub from: String,
    pub to: String,
}

/// Headline figures of an audit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_expenses: f64,
    pub total_transactions: usize,
    pub pending_amount: f64,
    pub average_expense: f64,
}

/// A generated audit report
///
/// Built once from an `Analysis`; its id and timestamps never change after
/// creation. Regenerate to pick up later changes to the expense list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub report_id: String,
    /// Creation time, formatted for the local locale
    pub generated_date: String,
    pub generated_at: DateTime<Utc>,
    pub period: ReportPeriod,
    pub summary: ReportSummary,
    pub category_breakdown: Breakdown,
    pub status_breakdown: Breakdown,
    pub time_analysis: Breakdown,
    pub anomalies: Vec<Anomaly>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
    pub compliance_score: u32,
    pub risk_level: RiskLevel,
}

/// Wraps an `Analysis` into an `AuditReport`
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    config: AuditConfig,
    now: Option<DateTime<Utc>>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AuditConfig) -> Self {
        Self { config, now: None }
    }

    /// Stamp reports with a fixed time instead of the clock
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Build a report with a fresh id
    pub fn build(&self, analysis: &Analysis) -> AuditReport {
        let generated_at = self.now.unwrap_or_else(Utc::now);

        let period = analysis
            .time_analysis
            .key_range()
            .map(|(from, to)| ReportPeriod {
                from: from.to_string(),
                to: to.to_string(),
            })
            .unwrap_or_default();

        let total_transactions = analysis.transaction_count();
        let pending_amount = analysis.pending_amount();
        let ratio = pending_ratio(pending_amount, analysis.total_expenses);
        let anomaly_count = analysis.anomalies.len();

        let report = AuditReport {
            report_id: new_report_id(),
            generated_date: locale_timestamp(generated_at),
            generated_at,
            period,
            summary: ReportSummary {
                total_expenses: analysis.total_expenses,
                total_transactions,
                pending_amount,
                average_expense: analysis.average_expense(),
            },
            category_breakdown: analysis.category_breakdown.clone(),
            status_breakdown: analysis.status_breakdown.clone(),
            time_analysis: analysis.time_analysis.clone(),
            anomalies: analysis.anomalies.clone(),
            insights: analysis.insights.clone(),
            recommendations: analysis.recommendations.clone(),
            compliance_score: compliance_score(anomaly_count, ratio, &self.config),
            risk_level: risk_level(anomaly_count, ratio, &self.config),
        };

        debug!(
            report_id = %report.report_id,
            score = report.compliance_score,
            risk = report.risk_level.as_str(),
            "Audit report built"
        );

        report
    }
}

/// `AUD-` followed by 12 upper-case hex digits of a random v4 UUID
fn new_report_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("AUD-{}", hex[..12].to_uppercase())
}

/// `9/8/2025, 2:05:09 PM` style timestamp in local time
fn locale_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}
