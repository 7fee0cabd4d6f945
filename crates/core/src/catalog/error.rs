//! Error types for chart of accounts operations.

use saldo_shared::types::AccountId;
use thiserror::Error;

/// Errors that can occur while managing the chart of accounts.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required field was left empty.
    #[error("Account {0} is required")]
    MissingField(&'static str),

    /// Account code collides with an existing account (active or not).
    #[error("Account code '{0}' already exists")]
    DuplicateCode(String),

    /// Account cannot be deleted because journal lines reference it.
    #[error("Account {account_id} is referenced by {line_count} journal lines")]
    InUse {
        /// The account being deleted.
        account_id: AccountId,
        /// Number of referencing journal lines.
        line_count: u64,
    },

    /// Account not found.
    #[error("Account not found: {0}")]
    NotFound(AccountId),
}

impl CatalogError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "VALIDATION_ERROR",
            Self::DuplicateCode(_) => "DUPLICATE_CODE",
            Self::InUse { .. } => "ACCOUNT_IN_USE",
            Self::NotFound(_) => "ACCOUNT_NOT_FOUND",
        }
    }
}
