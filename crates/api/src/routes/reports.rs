//! Report routes.
//!
//! All report endpoints are pure reads; report values are numeric
//! decimals formatted by the caller.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use tracing::error;

use crate::AppState;
use crate::routes::internal_error;
use saldo_db::repositories::report::{ReportError, ReportRepository};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/years/{year}/reports/trial-balance", get(trial_balance))
        .route(
            "/years/{year}/reports/adjusted-trial-balance",
            get(adjusted_trial_balance),
        )
        .route(
            "/years/{year}/reports/income-statement",
            get(income_statement),
        )
        .route("/years/{year}/reports/equity-changes", get(equity_changes))
        .route("/years/{year}/reports/balance-sheet", get(balance_sheet))
        .route("/years/{year}/reports/general-ledger", get(general_ledger))
        .route("/years/{year}/summary", get(summary))
}

/// GET `/years/{year}/reports/trial-balance`
async fn trial_balance(State(state): State<AppState>, Path(year): Path<i32>) -> impl IntoResponse {
    let repo = ReportRepository::new((*state.db).clone());
    respond(repo.trial_balance(year).await)
}

/// GET `/years/{year}/reports/adjusted-trial-balance`
async fn adjusted_trial_balance(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> impl IntoResponse {
    let repo = ReportRepository::new((*state.db).clone());
    respond(repo.adjusted_trial_balance(year).await)
}

/// GET `/years/{year}/reports/income-statement`
async fn income_statement(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> impl IntoResponse {
    let repo = ReportRepository::new((*state.db).clone());
    respond(repo.income_statement(year).await)
}

/// GET `/years/{year}/reports/equity-changes`
async fn equity_changes(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> impl IntoResponse {
    let repo = ReportRepository::new((*state.db).clone());
    respond(repo.equity_changes(year).await)
}

/// GET `/years/{year}/reports/balance-sheet`
async fn balance_sheet(State(state): State<AppState>, Path(year): Path<i32>) -> impl IntoResponse {
    let repo = ReportRepository::new((*state.db).clone());
    respond(repo.balance_sheet(year, &state.report_config).await)
}

/// GET `/years/{year}/reports/general-ledger`
async fn general_ledger(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> impl IntoResponse {
    let repo = ReportRepository::new((*state.db).clone());
    respond(repo.general_ledger(year).await)
}

/// GET `/years/{year}/summary` - Dashboard totals for a year.
async fn summary(State(state): State<AppState>, Path(year): Path<i32>) -> impl IntoResponse {
    let repo = ReportRepository::new((*state.db).clone());
    respond(repo.summary(year).await)
}

/// Serializes a report or maps the error to a JSON response.
fn respond<T: Serialize>(result: Result<T, ReportError>) -> axum::response::Response {
    match result {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to build report");
            internal_error()
        }
    }
}
