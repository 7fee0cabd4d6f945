//! Chart of accounts routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::AppState;
use crate::routes::internal_error;
use saldo_core::catalog::{AccountType, CatalogError};
use saldo_db::repositories::account::{
    AccountError, AccountRepository, CreateAccountInput, UpdateAccountInput,
};

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(list_accounts))
        .route("/accounts", post(create_account))
        .route("/accounts/{id}", put(update_account))
        .route("/accounts/{id}", delete(delete_account))
}

/// Query parameters for listing accounts.
#[derive(Debug, Deserialize)]
pub struct ListAccountsQuery {
    /// Only include active accounts.
    #[serde(default)]
    pub active_only: bool,
}

/// Request body for creating or updating an account.
#[derive(Debug, Deserialize)]
pub struct AccountRequest {
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type: asset, liability, equity, prive, revenue, expense.
    pub account_type: AccountType,
    /// Whether the account is active.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Response for a single account.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Account ID.
    pub id: Uuid,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account type.
    pub account_type: AccountType,
    /// Whether the account is active.
    pub is_active: bool,
}

impl From<saldo_db::entities::accounts::Model> for AccountResponse {
    fn from(model: saldo_db::entities::accounts::Model) -> Self {
        Self {
            id: model.id,
            code: model.code,
            name: model.name,
            account_type: model.account_type.into(),
            is_active: model.is_active,
        }
    }
}

/// GET `/accounts` - List accounts ordered by code.
async fn list_accounts(
    State(state): State<AppState>,
    Query(query): Query<ListAccountsQuery>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    match repo.list_accounts(query.active_only).await {
        Ok(accounts) => {
            let response: Vec<AccountResponse> =
                accounts.into_iter().map(AccountResponse::from).collect();
            (StatusCode::OK, Json(json!({ "accounts": response }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list accounts");
            internal_error()
        }
    }
}

/// POST `/accounts` - Create an account.
async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<AccountRequest>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    let input = CreateAccountInput {
        code: payload.code,
        name: payload.name,
        account_type: payload.account_type,
        is_active: payload.is_active,
    };

    match repo.create_account(input).await {
        Ok(account) => {
            info!(account_id = %account.id, code = %account.code, "Account created");
            (StatusCode::CREATED, Json(AccountResponse::from(account))).into_response()
        }
        Err(e) => account_error_response(&e),
    }
}

/// PUT `/accounts/{id}` - Replace an account's fields.
async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AccountRequest>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    let input = UpdateAccountInput {
        code: payload.code,
        name: payload.name,
        account_type: payload.account_type,
        is_active: payload.is_active,
    };

    match repo.update_account(id, input).await {
        Ok(account) => {
            info!(account_id = %id, "Account updated");
            (StatusCode::OK, Json(AccountResponse::from(account))).into_response()
        }
        Err(e) => account_error_response(&e),
    }
}

/// DELETE `/accounts/{id}` - Delete an unreferenced account.
async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let repo = AccountRepository::new((*state.db).clone());

    match repo.delete_account(id).await {
        Ok(()) => {
            info!(account_id = %id, "Account deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => account_error_response(&e),
    }
}

/// Maps account repository errors to JSON responses.
fn account_error_response(err: &AccountError) -> axum::response::Response {
    match err {
        AccountError::Rule(rule) => {
            let status = match rule {
                CatalogError::MissingField(_) => StatusCode::BAD_REQUEST,
                CatalogError::DuplicateCode(_) => StatusCode::CONFLICT,
                CatalogError::InUse { .. } => StatusCode::CONFLICT,
                CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            };
            (
                status,
                Json(json!({
                    "error": rule.error_code(),
                    "message": rule.to_string()
                })),
            )
                .into_response()
        }
        AccountError::Database(e) => {
            error!(error = %e, "Database error in account operation");
            internal_error()
        }
    }
}
