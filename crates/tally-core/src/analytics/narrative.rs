//! Human-readable insights and recommendations

use super::breakdown::Breakdown;
use crate::config::AuditConfig;

/// Format an amount for display (`$1234.50`)
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Observations about where the money went
///
/// Order is fixed: top category first, then the pending backlog.
pub fn insights(category_breakdown: &Breakdown, pending_amount: f64) -> Vec<String> {
    let mut insights = Vec::new();

    if let Some((category, bucket)) = category_breakdown.largest() {
        insights.push(format!(
            "Highest spending category: {} ({})",
            category,
            format_currency(bucket.total)
        ));
    }

    if pending_amount > 0.0 {
        insights.push(format!(
            "{} in pending approvals requiring attention",
            format_currency(pending_amount)
        ));
    }

    insights
}

/// Suggested actions, in a fixed order
pub fn recommendations(
    category_breakdown: &Breakdown,
    total_expenses: f64,
    pending_amount: f64,
    anomaly_count: usize,
    config: &AuditConfig,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if anomaly_count > 0 {
        recommendations.push("Review high-cost expenses flagged as anomalies".to_string());
    }

    if pending_amount > config.pending_warning_ratio * total_expenses {
        recommendations
            .push("Consider expediting approval process for pending expenses".to_string());
    }

    let concentration_limit = config.concentration_ratio * total_expenses;
    for (category, bucket) in category_breakdown.iter() {
        if bucket.total > concentration_limit {
            let pct = bucket.total / total_expenses * 100.0;
            recommendations.push(format!(
                "{} expenses are {:.1}% of total - consider budget review",
                category, pct
            ));
        }
    }

    recommendations
}
