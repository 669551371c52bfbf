//! Analytics Engine - turns an expense list into an `Analysis`

use tracing::debug;

use super::anomaly::detect_anomalies;
use super::breakdown::Breakdown;
use super::narrative::{insights, recommendations};
use super::types::{average, Analysis};
use crate::config::AuditConfig;
use crate::models::Expense;

/// Stateless analyzer; holds only its thresholds
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    config: AuditConfig,
}

impl AnalyticsEngine {
    /// Create an engine with the default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with explicit thresholds
    pub fn with_config(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Analyze a snapshot of the expense list
    ///
    /// Pure: the input is not modified and identical input yields identical
    /// output. An empty list yields an all-zero analysis.
    pub fn analyze(&self, expenses: &[Expense]) -> Analysis {
        let mut total_expenses = 0.0;
        let mut category_breakdown = Breakdown::new();
        let mut status_breakdown = Breakdown::new();
        let mut time_analysis = Breakdown::new();

        for expense in expenses {
            total_expenses += expense.cost;
            category_breakdown.record(&expense.category, expense.cost);
            status_breakdown.record(&expense.status, expense.cost);
            time_analysis.record(expense.month_key(), expense.cost);
        }

        let avg_expense = average(total_expenses, expenses.len());
        let anomalies = detect_anomalies(expenses, avg_expense, &self.config);

        let mut analysis = Analysis {
            total_expenses,
            category_breakdown,
            status_breakdown,
            time_analysis,
            anomalies,
            insights: Vec::new(),
            recommendations: Vec::new(),
        };

        let pending_amount = analysis.pending_amount();
        analysis.insights = insights(&analysis.category_breakdown, pending_amount);
        analysis.recommendations = recommendations(
            &analysis.category_breakdown,
            total_expenses,
            pending_amount,
            analysis.anomalies.len(),
            &self.config,
        );

        debug!(
            expenses = expenses.len(),
            categories = analysis.category_breakdown.len(),
            months = analysis.time_analysis.len(),
            anomalies = analysis.anomalies.len(),
            "Expense analysis complete"
        );

        analysis
    }
}

/// Analyze with the default thresholds
pub fn analyze(expenses: &[Expense]) -> Analysis {
    AnalyticsEngine::new().analyze(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::types::Severity;

    fn expense(id: i64, date: &str, category: &str, cost: f64, status: &str) -> Expense {
        Expense {
            id,
            date: date.to_string(),
            item: format!("Item {}", id),
            description: String::new(),
            category: category.to_string(),
            cost,
            status: status.to_string(),
        }
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(1, "2025-09-08", "Office", 200.00, "approved"),
            expense(2, "2025-09-07", "Meals", 89.25, "pending"),
            expense(3, "2025-08-20", "Travel", 120.00, "approved"),
            expense(4, "2025-08-02", "Office", 30.00, "pending"),
        ]
    }

    #[test]
    fn test_aggregation() {
        let analysis = analyze(&sample());

        assert!((analysis.total_expenses - 439.25).abs() < 1e-9);

        let office = analysis.category_breakdown.get("Office").unwrap();
        assert!((office.total - 230.0).abs() < 1e-9);
        assert_eq!(office.count, 2);

        let pending = analysis.status_breakdown.get("pending").unwrap();
        assert!((pending.total - 119.25).abs() < 1e-9);
        assert_eq!(pending.count, 2);

        let months: Vec<&str> = analysis.time_analysis.keys().collect();
        assert_eq!(months, vec!["2025-09", "2025-08"]);
        assert_eq!(analysis.time_analysis.get("2025-08").unwrap().count, 2);
    }

    #[test]
    fn test_empty_list() {
        let analysis = analyze(&[]);

        assert_eq!(analysis.total_expenses, 0.0);
        assert!(analysis.category_breakdown.is_empty());
        assert!(analysis.status_breakdown.is_empty());
        assert!(analysis.time_analysis.is_empty());
        assert!(analysis.anomalies.is_empty());
        assert!(analysis.insights.is_empty());
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn test_anomaly_threshold_example() {
        let list: Vec<Expense> = [10.0, 10.0, 10.0, 100.0]
            .iter()
            .enumerate()
            .map(|(i, &c)| expense(i as i64 + 1, "2025-09-01", "Office", c, "approved"))
            .collect();

        let analysis = analyze(&list);
        assert_eq!(analysis.anomalies.len(), 1);
        assert_eq!(analysis.anomalies[0].anomaly_type.as_str(), "High Cost");
        assert_eq!(analysis.anomalies[0].severity, Severity::High);
        assert_eq!(
            analysis.recommendations[0],
            "Review high-cost expenses flagged as anomalies"
        );
    }

    #[test]
    fn test_insights_and_recommendations() {
        let analysis = analyze(&sample());

        assert_eq!(
            analysis.insights,
            vec![
                "Highest spending category: Office ($230.00)".to_string(),
                "$119.25 in pending approvals requiring attention".to_string(),
            ]
        );
        // no anomaly (avg 109.81); pending 27.1% (no expedite); Office 52.4% > 40%
        assert_eq!(
            analysis.recommendations,
            vec!["Office expenses are 52.4% of total - consider budget review".to_string()]
        );
    }

    #[test]
    fn test_idempotent() {
        let list = sample();
        let engine = AnalyticsEngine::new();
        assert_eq!(engine.analyze(&list), engine.analyze(&list));
    }

    #[test]
    fn test_tie_break_first_inserted() {
        let list = vec![
            expense(1, "2025-09-01", "Meals", 50.0, "approved"),
            expense(2, "2025-09-02", "Software", 50.0, "approved"),
        ];
        for _ in 0..3 {
            let analysis = analyze(&list);
            assert_eq!(
                analysis.insights[0],
                "Highest spending category: Meals ($50.00)"
            );
        }
    }

    #[test]
    fn test_unknown_labels_and_malformed_dates() {
        let list = vec![
            expense(1, "sometime", "Marketing", 10.0, "rejected"),
            expense(2, "2025", "Office", 5.0, "approved"),
        ];
        let analysis = analyze(&list);

        assert!(analysis.category_breakdown.get("Marketing").is_some());
        assert!(analysis.status_breakdown.get("rejected").is_some());
        assert!(analysis.time_analysis.get("sometim").is_some());
        assert!(analysis.time_analysis.get("2025").is_some());
        assert_eq!(analysis.pending_amount(), 0.0);
    }

    #[test]
    fn test_custom_config() {
        let config = AuditConfig {
            concentration_ratio: 0.9,
            ..Default::default()
        };
        let analysis = AnalyticsEngine::with_config(config).analyze(&sample());
        assert!(analysis.recommendations.is_empty());
    }
}
