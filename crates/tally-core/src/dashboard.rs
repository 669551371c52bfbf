//! Dashboard overview and chart series
//!
//! Headline figures and per-category / per-month series for display. These
//! are plain numbers; drawing them is up to the presentation layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::{average, Breakdown};
use crate::models::{month_key, Expense};

/// Label used for expenses with an empty category in charts
const UNCATEGORIZED: &str = "Other";

/// Dashboard summary statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_expenses: f64,
    pub total_items: usize,
    pub pending_count: usize,
    pub pending_amount: f64,
    /// Spend dated in the same calendar month as `today`
    pub this_month: f64,
}

impl DashboardStats {
    pub fn compute(expenses: &[Expense], today: NaiveDate) -> Self {
        let current_month = today.format("%Y-%m").to_string();

        let mut stats = Self {
            total_expenses: 0.0,
            total_items: expenses.len(),
            pending_count: 0,
            pending_amount: 0.0,
            this_month: 0.0,
        };

        for expense in expenses {
            stats.total_expenses += expense.cost;
            if expense.is_pending() {
                stats.pending_count += 1;
                stats.pending_amount += expense.cost;
            }
            if expense.month_key() == current_month {
                stats.this_month += expense.cost;
            }
        }

        stats
    }
}

/// One bar/slice of the category chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: String,
    pub amount: f64,
    /// Share of total spend, in percent
    pub share_pct: f64,
    /// Size relative to the largest category, in percent
    pub bar_pct: f64,
}

/// One bar of the monthly chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// `YYYY-MM`
    pub month: String,
    /// Short label such as `Sep 25`
    pub label: String,
    pub amount: f64,
    pub bar_pct: f64,
}

/// Chart series and quick stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub categories: Vec<CategorySlice>,
    pub monthly: Vec<MonthlyPoint>,
    pub total: f64,
    pub average: f64,
    pub top_category: Option<String>,
    pub category_count: usize,
}

impl ChartData {
    /// Empty input yields empty series and zero figures
    pub fn compute(expenses: &[Expense]) -> Self {
        let mut by_category = Breakdown::new();
        let mut by_month = Breakdown::new();
        let mut total = 0.0;

        for expense in expenses {
            let category = if expense.category.is_empty() {
                UNCATEGORIZED
            } else {
                expense.category.as_str()
            };
            by_category.record(category, expense.cost);
            by_month.record(month_key(&expense.date), expense.cost);
            total += expense.cost;
        }

        let max_category = max_total(&by_category);
        let categories = by_category
            .iter()
            .map(|(category, bucket)| CategorySlice {
                category: category.to_string(),
                amount: bucket.total,
                share_pct: percent(bucket.total, total),
                bar_pct: percent(bucket.total, max_category),
            })
            .collect();

        let max_month = max_total(&by_month);
        let monthly = by_month
            .iter()
            .map(|(month, bucket)| MonthlyPoint {
                month: month.to_string(),
                label: month_label(month),
                amount: bucket.total,
                bar_pct: percent(bucket.total, max_month),
            })
            .collect();

        Self {
            categories,
            monthly,
            total,
            average: average(total, expenses.len()),
            top_category: by_category.largest().map(|(c, _)| c.to_string()),
            category_count: by_category.len(),
        }
    }
}

fn max_total(breakdown: &Breakdown) -> f64 {
    breakdown.largest().map(|(_, b)| b.total).unwrap_or(0.0)
}

fn percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// `2025-09` -> `Sep 25`; anything unparseable is returned as-is
pub fn month_label(month: &str) -> String {
    NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
        .map(|d| d.format("%b %y").to_string())
        .unwrap_or_else(|_| month.to_string())
}
