//! High-cost anomaly detection
//!
//! Flags expenses whose cost is a large multiple of the mean cost of the
//! whole list. Order follows the input, not the size of the outlier.

use super::types::{Anomaly, AnomalyType, Severity};
use crate::config::AuditConfig;
use crate::models::Expense;

/// Flag every expense above `average * medium_multiplier`
///
/// Severity escalates to `High` above `average * high_multiplier`. An
/// average of 0 (empty list, or all zero costs) flags nothing.
pub fn detect_anomalies(expenses: &[Expense], average: f64, config: &AuditConfig) -> Vec<Anomaly> {
    let flag_above = average * config.anomaly_medium_multiplier;
    let high_above = average * config.anomaly_high_multiplier;

    expenses
        .iter()
        .filter(|e| e.cost > flag_above)
        .map(|e| Anomaly {
            anomaly_type: AnomalyType::HighCost,
            expense_id: e.id,
            item: e.item.clone(),
            cost: e.cost,
            severity: if e.cost > high_above {
                Severity::High
            } else {
                Severity::Medium
            },
        })
        .collect()
}
