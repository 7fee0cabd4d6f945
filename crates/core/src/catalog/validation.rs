//! Business rule validation for the chart of accounts.
//!
//! The uniqueness predicates are pure so they can be property-tested; the
//! storage layer enforces them against the live account set.

use std::collections::HashSet;

use saldo_shared::types::AccountId;

use super::error::CatalogError;

/// Validates the required fields of a new or updated account.
///
/// # Errors
///
/// Returns `MissingField` if `code` or `name` is empty after trimming.
pub fn validate_account_fields(code: &str, name: &str) -> Result<(), CatalogError> {
    if code.trim().is_empty() {
        return Err(CatalogError::MissingField("code"));
    }
    if name.trim().is_empty() {
        return Err(CatalogError::MissingField("name"));
    }
    Ok(())
}

/// Checks whether a code is unique among all existing codes.
///
/// Codes are unique among all accounts, active or inactive.
#[must_use]
pub fn is_code_unique<S: std::hash::BuildHasher>(
    existing_codes: &HashSet<String, S>,
    new_code: &str,
) -> bool {
    !existing_codes.contains(new_code)
}

/// Checks whether changing an account's code would collide with a
/// different account.
///
/// Keeping the current code is always valid.
#[must_use]
pub fn is_code_update_valid<S: std::hash::BuildHasher>(
    existing_codes: &HashSet<String, S>,
    current_code: &str,
    new_code: &str,
) -> bool {
    if current_code == new_code {
        return true;
    }
    !existing_codes.contains(new_code)
}

/// Validates that an account may be deleted.
///
/// An account with any posted journal line can only be deactivated,
/// never deleted, so historical postings keep a valid reference.
///
/// # Errors
///
/// Returns `InUse` when `line_count` is non-zero.
pub fn ensure_deletable(account_id: AccountId, line_count: u64) -> Result<(), CatalogError> {
    if line_count > 0 {
        return Err(CatalogError::InUse {
            account_id,
            line_count,
        });
    }
    Ok(())
}
