//! Core types for the analytics engine

use serde::{Deserialize, Serialize};
use std::fmt;

use super::breakdown::Breakdown;
use crate::models::STATUS_PENDING;

/// Kinds of anomaly the engine can flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyType {
    /// Cost well above the average expense
    #[serde(rename = "High Cost")]
    HighCost,
}

impl AnomalyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyType::HighCost => "High Cost",
        }
    }
}

impl fmt::Display for AnomalyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of a flagged anomaly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An expense flagged for review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    #[serde(rename = "type")]
    pub anomaly_type: AnomalyType,
    /// Id of the flagged expense
    pub expense_id: i64,
    pub item: String,
    pub cost: f64,
    pub severity: Severity,
}

/// Result of analyzing an expense list
///
/// Recomputed from scratch on every call; it holds no reference to the input
/// and goes stale as soon as the caller's list changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub total_expenses: f64,
    pub category_breakdown: Breakdown,
    pub status_breakdown: Breakdown,
    /// Keyed by month (`YYYY-MM`)
    pub time_analysis: Breakdown,
    /// In input order
    pub anomalies: Vec<Anomaly>,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Analysis {
    /// Total of the `pending` status bucket (0 when nothing is pending)
    pub fn pending_amount(&self) -> f64 {
        self.status_breakdown.get_or_default(STATUS_PENDING).total
    }

    /// Number of analyzed expenses
    pub fn transaction_count(&self) -> usize {
        self.category_breakdown.count()
    }

    /// Mean cost, or 0 for an empty analysis
    pub fn average_expense(&self) -> f64 {
        average(self.total_expenses, self.transaction_count())
    }
}

/// `total / count`, defined as 0 when `count` is 0
pub fn average(total: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
