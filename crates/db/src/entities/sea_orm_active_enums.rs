//! `SeaORM` active enums mapped to database enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account classification, stored as the `account_type` database enum.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "account_type")]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Asset account.
    #[sea_orm(string_value = "asset")]
    Asset,
    /// Liability account.
    #[sea_orm(string_value = "liability")]
    Liability,
    /// Equity account.
    #[sea_orm(string_value = "equity")]
    Equity,
    /// Owner drawings.
    #[sea_orm(string_value = "prive")]
    Prive,
    /// Revenue account.
    #[sea_orm(string_value = "revenue")]
    Revenue,
    /// Expense account.
    #[sea_orm(string_value = "expense")]
    Expense,
}

impl From<saldo_core::catalog::AccountType> for AccountType {
    fn from(value: saldo_core::catalog::AccountType) -> Self {
        use saldo_core::catalog::AccountType as Core;
        match value {
            Core::Asset => Self::Asset,
            Core::Liability => Self::Liability,
            Core::Equity => Self::Equity,
            Core::Prive => Self::Prive,
            Core::Revenue => Self::Revenue,
            Core::Expense => Self::Expense,
        }
    }
}

impl From<AccountType> for saldo_core::catalog::AccountType {
    fn from(value: AccountType) -> Self {
        match value {
            AccountType::Asset => Self::Asset,
            AccountType::Liability => Self::Liability,
            AccountType::Equity => Self::Equity,
            AccountType::Prive => Self::Prive,
            AccountType::Revenue => Self::Revenue,
            AccountType::Expense => Self::Expense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saldo_core::catalog::AccountType as Core;

    #[test]
    fn test_conversion_roundtrip() {
        for core in [
            Core::Asset,
            Core::Liability,
            Core::Equity,
            Core::Prive,
            Core::Revenue,
            Core::Expense,
        ] {
            let db: AccountType = core.into();
            let back: Core = db.into();
            assert_eq!(back, core);
        }
    }
}
