//! Chart of accounts: types, classification, and validation rules.

pub mod error;
pub mod types;
pub mod validation;

pub use error::CatalogError;
pub use types::{Account, AccountType, NormalBalance};
pub use validation::{
    ensure_deletable, is_code_unique, is_code_update_valid, validate_account_fields,
};
