//! Analysis handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::AppState;
use tally_core::{Analysis, AnalyticsEngine};

/// GET /api/analysis - Analyze the current ledger
pub async fn get_analysis(State(state): State<Arc<AppState>>) -> Json<Analysis> {
    let expenses = state.snapshot().await;
    let analysis = AnalyticsEngine::with_config(state.audit.clone()).analyze(&expenses);
    Json(analysis)
}
