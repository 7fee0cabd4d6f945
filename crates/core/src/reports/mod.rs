//! Report builder: trial balances, financial statements, and ledger
//! views derived from posted journal entries.
//!
//! Reports are pure, idempotent reads; generating one never mutates the
//! ledger.

pub mod builder;
pub mod classify;
pub mod types;


pub use builder::ReportBuilder;
pub use classify::{AssetClass, LiabilityClass, classify_asset, classify_liability};
pub use types::{
    AdjustedTrialBalanceReport, BalanceSheetReport, DataIntegrityWarning, EquityChangesReport,
    GeneralLedgerReport, IncomeStatementReport, LedgerAccountView, SectionLine, TrialBalanceReport,
    TrialBalanceRow, YearSummary,
};
