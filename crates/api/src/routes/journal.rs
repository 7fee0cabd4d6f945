//! Journal entry routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};
use uuid::Uuid;

use crate::AppState;
use crate::routes::internal_error;
use saldo_core::journal::{
    EntryKind, JournalEntry, JournalEntryInput, JournalLineInput, JournalError as JournalRule,
};
use saldo_db::repositories::journal::{JournalError, JournalRepository};

/// Creates the journal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/years/{year}/entries", get(list_entries))
        .route("/years/{year}/entries", post(post_entry))
        .route("/entries/{id}", get(get_entry))
        .route("/entries/{id}", put(update_entry))
        .route("/entries/{id}", delete(delete_entry))
}

/// Query parameters for listing entries.
#[derive(Debug, Deserialize)]
pub struct ListEntriesQuery {
    /// Restrict to one entry kind.
    pub kind: Option<EntryKind>,
}

/// One submitted journal line.
#[derive(Debug, Deserialize)]
pub struct JournalLineRequest {
    /// The account to post to, if selected.
    pub account_id: Option<Uuid>,
    /// Whether this line is a debit.
    pub is_debit: bool,
    /// Line amount.
    pub amount: Decimal,
    /// Optional passthrough tax amount.
    pub tax: Option<Decimal>,
}

impl From<JournalLineRequest> for JournalLineInput {
    fn from(req: JournalLineRequest) -> Self {
        Self {
            account_id: req.account_id.map(Into::into),
            is_debit: req.is_debit,
            amount: req.amount,
            tax: req.tax,
        }
    }
}

/// Request body for posting a new entry.
#[derive(Debug, Deserialize)]
pub struct PostEntryRequest {
    /// Entry kind: ordinary or adjusting.
    pub kind: EntryKind,
    /// Transaction date.
    pub date: NaiveDate,
    /// Reference number.
    pub number: String,
    /// Description.
    pub description: String,
    /// Submitted lines.
    pub lines: Vec<JournalLineRequest>,
    /// The posting user.
    pub created_by: Option<Uuid>,
}

/// Request body for replacing an entry.
#[derive(Debug, Deserialize)]
pub struct UpdateEntryRequest {
    /// New transaction date.
    pub date: NaiveDate,
    /// New reference number.
    pub number: String,
    /// New description.
    pub description: String,
    /// Replacement lines; the old line set is discarded.
    pub lines: Vec<JournalLineRequest>,
}

/// Response for a journal line.
#[derive(Debug, Serialize)]
pub struct JournalLineResponse {
    /// Line ID.
    pub id: Uuid,
    /// Posted account.
    pub account_id: Uuid,
    /// Whether this line is a debit.
    pub is_debit: bool,
    /// Line amount.
    pub amount: Decimal,
    /// Optional passthrough tax amount.
    pub tax: Option<Decimal>,
}

/// Response for a journal entry with lines.
#[derive(Debug, Serialize)]
pub struct JournalEntryResponse {
    /// Entry ID.
    pub id: Uuid,
    /// Transaction date.
    pub date: NaiveDate,
    /// Reference number.
    pub number: String,
    /// Description.
    pub description: String,
    /// Entry kind.
    pub kind: EntryKind,
    /// The posting user.
    pub created_by: Option<Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// The entry's lines.
    pub lines: Vec<JournalLineResponse>,
}

impl From<JournalEntry> for JournalEntryResponse {
    fn from(entry: JournalEntry) -> Self {
        Self {
            id: entry.id.into_inner(),
            date: entry.date,
            number: entry.number,
            description: entry.description,
            kind: entry.kind,
            created_by: entry.created_by.map(saldo_shared::types::UserId::into_inner),
            created_at: entry.created_at,
            lines: entry
                .lines
                .into_iter()
                .map(|line| JournalLineResponse {
                    id: line.id.into_inner(),
                    account_id: line.account_id.into_inner(),
                    is_debit: line.is_debit,
                    amount: line.amount,
                    tax: line.tax,
                })
                .collect(),
        }
    }
}

/// GET `/years/{year}/entries` - List a year's entries ordered by
/// `(date, number)`.
async fn list_entries(
    State(state): State<AppState>,
    Path(year): Path<i32>,
    Query(query): Query<ListEntriesQuery>,
) -> impl IntoResponse {
    let repo = JournalRepository::new((*state.db).clone());

    match repo.list_for_period(year, query.kind).await {
        Ok(entries) => {
            let response: Vec<JournalEntryResponse> =
                entries.into_iter().map(JournalEntryResponse::from).collect();
            (StatusCode::OK, Json(json!({ "entries": response }))).into_response()
        }
        Err(e) => {
            error!(error = %e, year, "Failed to list journal entries");
            internal_error()
        }
    }
}

/// POST `/years/{year}/entries` - Post a new entry through the closing
/// gate.
async fn post_entry(
    State(state): State<AppState>,
    Path(year): Path<i32>,
    Json(payload): Json<PostEntryRequest>,
) -> impl IntoResponse {
    let repo = JournalRepository::new((*state.db).clone());

    let kind = payload.kind;
    let input = JournalEntryInput {
        date: payload.date,
        number: payload.number,
        description: payload.description,
        lines: payload.lines.into_iter().map(Into::into).collect(),
        created_by: payload.created_by.map(Into::into),
    };

    match repo.post(year, kind, input).await {
        Ok(entry) => {
            info!(entry_id = %entry.id, year, "Journal entry posted");
            (StatusCode::CREATED, Json(JournalEntryResponse::from(entry))).into_response()
        }
        Err(e) => journal_error_response(&e),
    }
}

/// GET `/entries/{id}` - Fetch an entry with its lines.
async fn get_entry(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = JournalRepository::new((*state.db).clone());

    match repo.find_by_id(id).await {
        Ok(Some(entry)) => (StatusCode::OK, Json(JournalEntryResponse::from(entry))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "ENTRY_NOT_FOUND",
                "message": format!("Journal entry not found: {id}")
            })),
        )
            .into_response(),
        Err(e) => journal_error_response(&e),
    }
}

/// PUT `/entries/{id}` - Replace an entry's header and full line set.
async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEntryRequest>,
) -> impl IntoResponse {
    let repo = JournalRepository::new((*state.db).clone());

    let input = JournalEntryInput {
        date: payload.date,
        number: payload.number,
        description: payload.description,
        lines: payload.lines.into_iter().map(Into::into).collect(),
        created_by: None,
    };

    match repo.update(id, input).await {
        Ok(entry) => {
            info!(entry_id = %id, "Journal entry updated");
            (StatusCode::OK, Json(JournalEntryResponse::from(entry))).into_response()
        }
        Err(e) => journal_error_response(&e),
    }
}

/// DELETE `/entries/{id}` - Delete an entry and its lines.
async fn delete_entry(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = JournalRepository::new((*state.db).clone());

    match repo.delete(id).await {
        Ok(()) => {
            info!(entry_id = %id, "Journal entry deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => journal_error_response(&e),
    }
}

/// Maps journal repository errors to JSON responses.
fn journal_error_response(err: &JournalError) -> axum::response::Response {
    match err {
        JournalError::Rule(rule) => {
            let status = match rule {
                JournalRule::Validation(_)
                | JournalRule::EmptyEntry
                | JournalRule::Unbalanced { .. }
                | JournalRule::PeriodClosedForAdjustment { .. }
                | JournalRule::PeriodInAdjustment { .. } => StatusCode::BAD_REQUEST,
                JournalRule::NotFound(_) => StatusCode::NOT_FOUND,
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
        JournalError::Database(e) => {
            error!(error = %e, "Database error in journal operation");
            internal_error()
        }
    }
}
