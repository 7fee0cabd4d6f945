//! Chart of accounts domain types.

use rust_decimal::Decimal;
use saldo_shared::types::AccountId;
use serde::{Deserialize, Serialize};

/// Account classification in the chart of accounts.
///
/// `Prive` is the owner-drawings category used by sole proprietorships;
/// it is debit-normal like an expense but reported in the statement of
/// changes in equity rather than the income statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Asset account (debit-normal).
    Asset,
    /// Liability account (credit-normal).
    Liability,
    /// Equity account (credit-normal).
    Equity,
    /// Owner drawings (debit-normal).
    Prive,
    /// Revenue account (credit-normal).
    Revenue,
    /// Expense account (debit-normal).
    Expense,
}

impl AccountType {
    /// Returns the side on which this account type naturally accumulates
    /// positive value.
    #[must_use]
    pub const fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense | Self::Prive => NormalBalance::Debit,
            Self::Liability | Self::Equity | Self::Revenue => NormalBalance::Credit,
        }
    }

    /// Returns the lowercase string form used in storage and APIs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Prive => "prive",
            Self::Revenue => "revenue",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asset" => Ok(Self::Asset),
            "liability" => Ok(Self::Liability),
            "equity" => Ok(Self::Equity),
            "prive" => Ok(Self::Prive),
            "revenue" => Ok(Self::Revenue),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown account type: {s}")),
        }
    }
}

/// The normal-balance side of an account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    /// Debit-normal accounts (asset, expense, prive).
    Debit,
    /// Credit-normal accounts (liability, equity, revenue).
    Credit,
}

impl NormalBalance {
    /// Nets debit and credit totals into a signed balance for this side.
    ///
    /// Debit-normal: `debit - credit`. Credit-normal: `credit - debit`.
    #[must_use]
    pub fn net(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::Debit => debit - credit,
            Self::Credit => credit - debit,
        }
    }
}

/// An account in the chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Account code; unique among all accounts, used as sort key and for
    /// balance-sheet classification.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Whether the account accepts new postings.
    pub is_active: bool,
}

impl Account {
    /// Returns the account's numeric code, or zero when the code is not
    /// numeric (non-numeric codes classify as current, matching the
    /// classification fallback).
    #[must_use]
    pub fn numeric_code(&self) -> u32 {
        self.code.trim().parse().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[rstest]
    #[case(AccountType::Asset, NormalBalance::Debit)]
    #[case(AccountType::Expense, NormalBalance::Debit)]
    #[case(AccountType::Prive, NormalBalance::Debit)]
    #[case(AccountType::Liability, NormalBalance::Credit)]
    #[case(AccountType::Equity, NormalBalance::Credit)]
    #[case(AccountType::Revenue, NormalBalance::Credit)]
    fn test_normal_balance(#[case] account_type: AccountType, #[case] expected: NormalBalance) {
        assert_eq!(account_type.normal_balance(), expected);
    }

    #[test]
    fn test_net_debit_normal() {
        let net = NormalBalance::Debit.net(dec!(100), dec!(30));
        assert_eq!(net, dec!(70));
    }

    #[test]
    fn test_net_credit_normal() {
        let net = NormalBalance::Credit.net(dec!(30), dec!(100));
        assert_eq!(net, dec!(70));
    }

    #[test]
    fn test_account_type_roundtrip() {
        for ty in [
            AccountType::Asset,
            AccountType::Liability,
            AccountType::Equity,
            AccountType::Prive,
            AccountType::Revenue,
            AccountType::Expense,
        ] {
            assert_eq!(AccountType::from_str(ty.as_str()).unwrap(), ty);
        }
        assert!(AccountType::from_str("inventory").is_err());
    }

    #[test]
    fn test_numeric_code_fallback() {
        let account = Account {
            id: AccountId::new(),
            code: "CASH".to_string(),
            name: "Cash".to_string(),
            account_type: AccountType::Asset,
            is_active: true,
        };
        assert_eq!(account.numeric_code(), 0);

        let numeric = Account {
            code: "1100".to_string(),
            ..account
        };
        assert_eq!(numeric.numeric_code(), 1100);
    }
}
