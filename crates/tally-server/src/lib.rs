//! Tally Web Server
//!
//! Axum-based REST API over an in-memory expense ledger.
//!
//! - Expense CRUD on the shared ledger
//! - Analysis, audit reports, dashboard and chart figures computed per request
//!   from a snapshot of the ledger
//! - Restrictive CORS policy and security headers
//! - Sanitized error responses

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info};

use tally_core::{AuditConfig, AuditReport, Expense, ExpenseLedger};

mod handlers;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    /// The expense list all handlers read and edit
    pub ledger: RwLock<ExpenseLedger>,
    /// Thresholds for analysis and audit reports
    pub audit: AuditConfig,
    pub config: ServerConfig,
    /// Most recently generated audit report, served by the export endpoint
    pub last_report: RwLock<Option<AuditReport>>,
}

impl AppState {
    pub fn new(ledger: ExpenseLedger, audit: AuditConfig, config: ServerConfig) -> Self {
        Self {
            ledger: RwLock::new(ledger),
            audit,
            config,
            last_report: RwLock::new(None),
        }
    }

    /// Copy of the current expense list; the lock is released on return
    pub async fn snapshot(&self) -> Vec<Expense> {
        self.ledger.read().await.list().to_vec()
    }
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        // Ledger
        .route(
            "/expenses",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route(
            "/expenses/:id",
            get(handlers::get_expense)
                .put(handlers::update_expense)
                .delete(handlers::delete_expense),
        )
        // Analytics
        .route("/analysis", get(handlers::get_analysis))
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/charts", get(handlers::get_charts))
        // Audit reports
        .route("/reports/audit", post(handlers::create_audit_report))
        .route("/reports/audit/export", get(handlers::export_audit_report));

    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];

    // Build CORS layer
    let cors = if state.config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    };

    let csp_value = HeaderValue::from_static(
        "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; connect-src 'self'; frame-ancestors 'none'",
    );

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            csp_value,
        ))
}

/// Start the server
pub async fn serve(
    ledger: ExpenseLedger,
    audit: AuditConfig,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    serve_with_config(ledger, audit, host, port, ServerConfig::default()).await
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    ledger: ExpenseLedger,
    audit: AuditConfig,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    info!(expenses = ledger.len(), "Ledger ready");

    let state = Arc::new(AppState::new(ledger, audit, config));
    let app = create_router(state);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /api/health - Liveness probe
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }

    /// Map a library error to a status: caller mistakes are 4xx, the rest 500
    pub fn from_core(err: tally_core::Error) -> Self {
        match err {
            tally_core::Error::NotFound(msg) => Self::not_found(&format!("{} not found", msg)),
            tally_core::Error::InvalidData(msg) | tally_core::Error::Import(msg) => {
                Self::bad_request(&msg)
            }
            other => Self::from(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
