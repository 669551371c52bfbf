//! Analytics Engine - expense aggregation, anomalies and narrative
//!
//! Takes a snapshot of the caller's expense list and produces an `Analysis`:
//!
//! - **Breakdowns** - totals and counts by category, status and month
//! - **Anomalies** - expenses far above the mean cost
//! - **Insights** - top category and pending backlog, as sentences
//! - **Recommendations** - follow-up actions derived from the above
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tally_core::analytics::AnalyticsEngine;
//!
//! let engine = AnalyticsEngine::new();
//! let analysis = engine.analyze(&expenses);
//! ```

pub mod anomaly;
pub mod breakdown;
pub mod engine;
pub mod narrative;
pub mod types;

#[cfg(test)]
mod props;

pub use anomaly::detect_anomalies;
pub use breakdown::{Breakdown, Bucket};
pub use engine::{analyze, AnalyticsEngine};
pub use narrative::format_currency;
pub use types::{average, Analysis, Anomaly, AnomalyType, Severity};
