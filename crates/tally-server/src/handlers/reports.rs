//! Audit report handlers

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, Response, StatusCode},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::{AppError, AppState};
use tally_core::{generate_audit_report, render_report, AuditReport, ExportFormat};

/// Query parameters for report export
#[derive(Debug, Deserialize)]
pub struct ReportExportQuery {
    /// Output format (default: text)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Generate a report from a snapshot of the ledger and remember it
async fn new_report(state: &AppState) -> AuditReport {
    let expenses = state.snapshot().await;
    let report = generate_audit_report(&expenses, &state.audit);

    info!(
        report_id = %report.report_id,
        score = report.compliance_score,
        risk = %report.risk_level,
        "Generated audit report"
    );

    *state.last_report.write().await = Some(report.clone());
    report
}

/// POST /api/reports/audit - Generate a new audit report
pub async fn create_audit_report(State(state): State<Arc<AppState>>) -> Json<AuditReport> {
    Json(new_report(&state).await)
}

/// GET /api/reports/audit/export - Render the latest audit report
///
/// Generates one first when none exists yet.
pub async fn export_audit_report(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReportExportQuery>,
) -> Result<Response<Body>, AppError> {
    let format: ExportFormat = params
        .format
        .parse()
        .map_err(|_| AppError::bad_request("Invalid format. Use 'text' or 'json'"))?;

    let latest = state.last_report.read().await.clone();
    let report = match latest {
        Some(report) => report,
        None => new_report(&state).await,
    };

    let body = render_report(&report, format).map_err(AppError::from_core)?;
    let extension = match format {
        ExportFormat::Text => "txt",
        ExportFormat::Json => "json",
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, format.content_type())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}.{}\"", report.report_id, extension),
        )
        .body(Body::from(body))
        .map_err(|e| AppError::internal(&e.to_string()))
}
