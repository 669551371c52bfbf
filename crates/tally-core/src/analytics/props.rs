//! Property-based tests for the analytics engine and report scoring.

use proptest::prelude::*;

use super::engine::analyze;
use super::types::average;
use crate::audit::ReportBuilder;
use crate::models::Expense;

const CATEGORIES: &[&str] = &["Office", "Travel", "Meals", "Software", "Equipment", "Other"];
const STATUSES: &[&str] = &["approved", "pending", "rejected"];

/// Strategy for costs in cents (0.00 to 50,000.00)
fn cost() -> impl Strategy<Value = f64> {
    (0u32..5_000_000u32).prop_map(|cents| f64::from(cents) / 100.0)
}

fn expense() -> impl Strategy<Value = Expense> {
    (
        0..CATEGORIES.len(),
        0..STATUSES.len(),
        2023i32..2026,
        1u32..=12,
        1u32..=28,
        cost(),
    )
        .prop_map(|(c, s, year, month, day, cost)| Expense {
            id: 0,
            date: format!("{:04}-{:02}-{:02}", year, month, day),
            item: "Item".to_string(),
            description: String::new(),
            category: CATEGORIES[c].to_string(),
            cost,
            status: STATUSES[s].to_string(),
        })
}

fn expenses() -> impl Strategy<Value = Vec<Expense>> {
    prop::collection::vec(expense(), 1..60).prop_map(|mut list| {
        for (i, e) in list.iter_mut().enumerate() {
            e.id = i as i64 + 1;
        }
        list
    })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Category, status and month totals each add up to the overall total.
    #[test]
    fn prop_breakdown_totals_match(list in expenses()) {
        let analysis = analyze(&list);
        let total = analysis.total_expenses;

        prop_assert!(close(analysis.category_breakdown.total(), total));
        prop_assert!(close(analysis.status_breakdown.total(), total));
        prop_assert!(close(analysis.time_analysis.total(), total));
    }

    /// Every expense is counted exactly once per breakdown.
    #[test]
    fn prop_breakdown_counts_match(list in expenses()) {
        let analysis = analyze(&list);

        prop_assert_eq!(analysis.category_breakdown.count(), list.len());
        prop_assert_eq!(analysis.status_breakdown.count(), list.len());
        prop_assert_eq!(analysis.time_analysis.count(), list.len());
    }

    /// Flagged expenses all exceed twice the mean, and none above it is missed.
    #[test]
    fn prop_anomalies_exceed_threshold(list in expenses()) {
        let analysis = analyze(&list);
        let avg = average(analysis.total_expenses, list.len());

        for anomaly in &analysis.anomalies {
            prop_assert!(anomaly.cost > 2.0 * avg);
        }
        let expected = list.iter().filter(|e| e.cost > 2.0 * avg).count();
        prop_assert_eq!(analysis.anomalies.len(), expected);
    }

    #[test]
    fn prop_analyze_is_deterministic(list in expenses()) {
        prop_assert_eq!(analyze(&list), analyze(&list));
    }

    /// Score stays in range and the summary agrees with the analysis.
    #[test]
    fn prop_report_summary_consistent(list in expenses()) {
        let analysis = analyze(&list);
        let report = ReportBuilder::new().build(&analysis);

        prop_assert!(report.compliance_score <= 100);
        prop_assert_eq!(report.summary.total_transactions, list.len());
        prop_assert!(close(report.summary.total_expenses, analysis.total_expenses));
        prop_assert!(report.summary.pending_amount <= report.summary.total_expenses + 1e-6);
    }
}
