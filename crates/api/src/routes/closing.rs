//! Closing lifecycle routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::{error, info};

use crate::AppState;
use crate::routes::internal_error;
use saldo_core::closing::BeginAdjustmentOutcome;
use saldo_db::repositories::closing::{ClosingError, ClosingRepository};

/// Creates the closing routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/years/{year}/closing", get(closing_state))
        .route("/years/{year}/closing/begin", post(begin_adjustment))
        .route("/years/{year}/closing/reopen", post(reopen))
}

/// GET `/years/{year}/closing` - The posting phase of a year.
async fn closing_state(State(state): State<AppState>, Path(year): Path<i32>) -> impl IntoResponse {
    let repo = ClosingRepository::new((*state.db).clone());

    match repo.state(year).await {
        Ok(closing) => (
            StatusCode::OK,
            Json(json!({ "year": year, "state": closing })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, year, "Failed to read closing state");
            internal_error()
        }
    }
}

/// POST `/years/{year}/closing/begin` - Enter the adjustment phase.
///
/// Already-adjusting years return 200 with a warning instead of failing.
async fn begin_adjustment(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> impl IntoResponse {
    let repo = ClosingRepository::new((*state.db).clone());

    match repo.begin_adjustment(year).await {
        Ok(BeginAdjustmentOutcome::Began) => {
            info!(year, "Adjustment phase began");
            (
                StatusCode::OK,
                Json(json!({ "year": year, "state": "adjusting" })),
            )
                .into_response()
        }
        Ok(BeginAdjustmentOutcome::AlreadyAdjusting) => (
            StatusCode::OK,
            Json(json!({
                "year": year,
                "state": "adjusting",
                "warning": "Year is already in the adjustment phase"
            })),
        )
            .into_response(),
        Err(e) => closing_error_response(&e),
    }
}

/// POST `/years/{year}/closing/reopen` - Return to the ordinary-entry
/// phase.
async fn reopen(State(state): State<AppState>, Path(year): Path<i32>) -> impl IntoResponse {
    let repo = ClosingRepository::new((*state.db).clone());

    match repo.reopen(year).await {
        Ok(closing) => {
            info!(year, "Year reopened");
            (
                StatusCode::OK,
                Json(json!({ "year": year, "state": closing })),
            )
                .into_response()
        }
        Err(e) => closing_error_response(&e),
    }
}

/// Maps closing repository errors to JSON responses.
fn closing_error_response(err: &ClosingError) -> axum::response::Response {
    match err {
        ClosingError::Rule(rule) => (
            StatusCode::CONFLICT,
            Json(json!({
                "error": rule.error_code(),
                "message": rule.to_string()
            })),
        )
            .into_response(),
        ClosingError::Database(e) => {
            error!(error = %e, "Database error in closing operation");
            internal_error()
        }
    }
}
