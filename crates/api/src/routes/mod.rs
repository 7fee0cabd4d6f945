//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::AppState;
use saldo_shared::AppError;

pub mod accounts;
pub mod closing;
pub mod health;
pub mod journal;
pub mod reports;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(accounts::routes())
        .merge(journal::routes())
        .merge(closing::routes())
        .merge(reports::routes())
}

/// Renders an application error as a JSON response.
pub(crate) fn app_error_response(err: &AppError) -> Response {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": err.to_string()
        })),
    )
        .into_response()
}

/// The generic 500 response for unexpected failures.
pub(crate) fn internal_error() -> Response {
    app_error_response(&AppError::Internal("An error occurred".to_string()))
}
