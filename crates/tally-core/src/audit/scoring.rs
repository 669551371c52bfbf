//! Compliance score and risk classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::AuditConfig;

/// Coarse risk classification of an audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(format!("Unknown risk level: {}", s)),
        }
    }
}

/// Share of spend awaiting approval, 0 when there is no spend
pub fn pending_ratio(pending_amount: f64, total_expenses: f64) -> f64 {
    if total_expenses > 0.0 {
        pending_amount / total_expenses
    } else {
        0.0
    }
}

/// Heuristic health score in [0, 100]
///
/// Starts at 100, loses a fixed penalty per anomaly, and loses the warning
/// and critical pending penalties cumulatively.
pub fn compliance_score(anomaly_count: usize, pending_ratio: f64, config: &AuditConfig) -> u32 {
    let anomaly_penalty = i64::try_from(anomaly_count)
        .unwrap_or(i64::MAX)
        .saturating_mul(i64::from(config.anomaly_penalty));

    let mut score = 100i64.saturating_sub(anomaly_penalty);
    if pending_ratio > config.pending_warning_ratio {
        score -= i64::from(config.pending_warning_penalty);
    }
    if pending_ratio > config.pending_critical_ratio {
        score -= i64::from(config.pending_critical_penalty);
    }

    score.clamp(0, 100) as u32
}

/// Classify risk from the anomaly count and pending ratio
pub fn risk_level(anomaly_count: usize, pending_ratio: f64, config: &AuditConfig) -> RiskLevel {
    if anomaly_count > config.high_risk_anomaly_count
        || pending_ratio > config.pending_critical_ratio
    {
        RiskLevel::High
    } else if anomaly_count > 0 || pending_ratio > config.pending_warning_ratio {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
