//! Report data types.
//!
//! Every report is an ordered sequence of line items plus explicit grand
//! totals. Values are numeric decimals; formatting belongs to the caller.

use rust_decimal::Decimal;
use saldo_shared::types::AccountId;
use serde::{Deserialize, Serialize};

use crate::balance::LedgerRow;
use crate::closing::ClosingState;

/// One row of a trial balance: the netted totals of an account, shown in
/// a single debit-or-credit column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Debit column value (zero when the credit side is larger).
    pub debit: Decimal,
    /// Credit column value (zero when the debit side is larger).
    pub credit: Decimal,
}

/// Trial balance over ordinary entries only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Fiscal year.
    pub year: i32,
    /// Rows ordered by account code; zero-activity accounts omitted.
    pub rows: Vec<TrialBalanceRow>,
    /// Grand total of the debit column.
    pub total_debit: Decimal,
    /// Grand total of the credit column.
    pub total_credit: Decimal,
    /// Whether the grand totals are equal within tolerance. A balanced
    /// ledger implies this by construction.
    pub is_balanced: bool,
}

/// Trial balance after adjusting entries are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustedTrialBalanceReport {
    /// Fiscal year.
    pub year: i32,
    /// Rows ordered by account code; near-zero closing balances omitted.
    pub rows: Vec<TrialBalanceRow>,
    /// Grand total of the debit column.
    pub total_debit: Decimal,
    /// Grand total of the credit column.
    pub total_credit: Decimal,
    /// Whether the grand totals are equal within tolerance.
    pub is_balanced: bool,
}

/// A single-value report line (statement sections).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLine {
    /// Account name.
    pub label: String,
    /// Signed amount under the section's sign convention.
    pub amount: Decimal,
}

/// Income statement for a fiscal year (both entry kinds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatementReport {
    /// Fiscal year.
    pub year: i32,
    /// Revenue lines (credit-normal balances); zero balances omitted.
    pub revenue: Vec<SectionLine>,
    /// Total revenue.
    pub total_revenue: Decimal,
    /// Expense lines (debit-normal balances); zero balances omitted.
    pub expenses: Vec<SectionLine>,
    /// Total expense.
    pub total_expense: Decimal,
    /// `total_revenue - total_expense`.
    pub net_income: Decimal,
}

/// Statement of changes in equity for a fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityChangesReport {
    /// Fiscal year.
    pub year: i32,
    /// Equity account lines (credit-normal balances).
    pub equity: Vec<SectionLine>,
    /// Total of equity account balances.
    pub total_equity: Decimal,
    /// Owner-drawings lines (debit-normal, positive when drawn).
    pub drawings: Vec<SectionLine>,
    /// Total drawings.
    pub total_drawings: Decimal,
    /// Net income carried from the income statement.
    pub net_income: Decimal,
    /// `total_equity + net_income - total_drawings`.
    pub ending_capital: Decimal,
}

/// A non-fatal data-integrity finding attached to a report.
///
/// Reported to the caller, never hidden, and never blocks generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataIntegrityWarning {
    /// Human-readable description of the mismatch.
    pub message: String,
    /// The offending signed difference.
    pub difference: Decimal,
}

/// Balance sheet for a fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// Fiscal year.
    pub year: i32,
    /// Current asset lines.
    pub current_assets: Vec<SectionLine>,
    /// Total current assets.
    pub total_current_assets: Decimal,
    /// Fixed asset lines.
    pub fixed_assets: Vec<SectionLine>,
    /// Total fixed assets.
    pub total_fixed_assets: Decimal,
    /// `total_current_assets + total_fixed_assets`.
    pub total_assets: Decimal,
    /// Current liability lines.
    pub current_liabilities: Vec<SectionLine>,
    /// Total current liabilities.
    pub total_current_liabilities: Decimal,
    /// Long-term liability lines.
    pub long_term_liabilities: Vec<SectionLine>,
    /// Total long-term liabilities.
    pub total_long_term_liabilities: Decimal,
    /// `total_current_liabilities + total_long_term_liabilities`.
    pub total_liabilities: Decimal,
    /// Ending capital carried from the statement of changes in equity.
    pub ending_capital: Decimal,
    /// `total_liabilities + ending_capital`.
    pub total_liabilities_and_equity: Decimal,
    /// Whether `total_assets == total_liabilities_and_equity` within
    /// tolerance.
    pub is_balanced: bool,
    /// Set when the identity does not hold.
    pub warning: Option<DataIntegrityWarning>,
}

/// The ledger view of a single account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerAccountView {
    /// Account identifier.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Running-balance rows in chronological order.
    pub rows: Vec<LedgerRow>,
}

/// General ledger: running balances of every active account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralLedgerReport {
    /// Fiscal year.
    pub year: i32,
    /// Accounts ordered by code.
    pub accounts: Vec<LedgerAccountView>,
}

/// Dashboard summary of a fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    /// Fiscal year.
    pub year: i32,
    /// Total revenue (both entry kinds).
    pub total_revenue: Decimal,
    /// Total expense (both entry kinds).
    pub total_expense: Decimal,
    /// Net income.
    pub net_income: Decimal,
    /// Total asset balances.
    pub total_assets: Decimal,
    /// Total liability balances.
    pub total_liabilities: Decimal,
    /// Total equity balances.
    pub total_equity: Decimal,
    /// Posting phase of the year.
    pub closing_state: ClosingState,
}
