//! Dashboard and chart handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Local;

use crate::AppState;
use tally_core::{ChartData, DashboardStats};

/// GET /api/dashboard - Headline figures for the current ledger
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardStats> {
    let expenses = state.snapshot().await;
    Json(DashboardStats::compute(&expenses, Local::now().date_naive()))
}

/// GET /api/charts - Category and monthly series
pub async fn get_charts(State(state): State<Arc<AppState>>) -> Json<ChartData> {
    let expenses = state.snapshot().await;
    Json(ChartData::compute(&expenses))
}
