//! Expense ledger handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{AppError, AppState};
use tally_core::models::{Expense, ExpenseUpdate, NewExpense};

/// GET /api/expenses - List expenses in ledger order
pub async fn list_expenses(State(state): State<Arc<AppState>>) -> Json<Vec<Expense>> {
    Json(state.snapshot().await)
}

/// GET /api/expenses/:id - Get a single expense
pub async fn get_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Expense>, AppError> {
    let ledger = state.ledger.read().await;
    let expense = ledger
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Expense not found"))?;
    Ok(Json(expense))
}

/// POST /api/expenses - Add an expense; omitted fields take the new-row defaults
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewExpense>,
) -> Result<(StatusCode, Json<Expense>), AppError> {
    let expense = state
        .ledger
        .write()
        .await
        .add(new)
        .map_err(AppError::from_core)?;

    info!(id = expense.id, item = %expense.item, "Created expense");
    Ok((StatusCode::CREATED, Json(expense)))
}

/// PUT /api/expenses/:id - Partial update
pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(update): Json<ExpenseUpdate>,
) -> Result<Json<Expense>, AppError> {
    let expense = state
        .ledger
        .write()
        .await
        .update(id, update)
        .map_err(AppError::from_core)?;

    info!(id, "Updated expense");
    Ok(Json(expense))
}

/// DELETE /api/expenses/:id - Remove an expense
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state
        .ledger
        .write()
        .await
        .remove(id)
        .map_err(AppError::from_core)?;

    info!(id, "Deleted expense");
    Ok(StatusCode::NO_CONTENT)
}
