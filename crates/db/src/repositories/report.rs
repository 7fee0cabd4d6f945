//! Report repository: fetches a year's snapshot and feeds the core
//! report builders.
//!
//! All operations are pure reads over the ledger; repeated calls with an
//! unchanged ledger yield identical reports.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use saldo_core::catalog::Account;
use saldo_core::journal::JournalEntry;
use saldo_core::reports::{
    AdjustedTrialBalanceReport, BalanceSheetReport, EquityChangesReport, GeneralLedgerReport,
    IncomeStatementReport, ReportBuilder, TrialBalanceReport, YearSummary,
};
use saldo_shared::config::ReportConfig;

use crate::entities::accounts;
use crate::repositories::closing::ClosingRepository;
use crate::repositories::journal::{JournalError, JournalRepository};

/// Error types for report generation.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<JournalError> for ReportError {
    fn from(err: JournalError) -> Self {
        match err {
            JournalError::Database(db) => Self::Database(db),
            // Reads never trip posting rules.
            JournalError::Rule(rule) => Self::Database(DbErr::Custom(rule.to_string())),
        }
    }
}

/// A momentary snapshot of the ledger for one fiscal year.
#[derive(Debug, Clone)]
pub struct YearSnapshot {
    /// The full chart of accounts.
    pub accounts: Vec<Account>,
    /// The year's entries with lines.
    pub entries: Vec<JournalEntry>,
}

/// Report repository.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches the chart of accounts and the year's entries.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn snapshot(&self, year: i32) -> Result<YearSnapshot, ReportError> {
        let accounts = accounts::Entity::find()
            .order_by_asc(accounts::Column::Code)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Account::from)
            .collect();

        let entries = JournalRepository::new(self.db.clone())
            .list_for_period(year, None)
            .await?;

        Ok(YearSnapshot { accounts, entries })
    }

    /// Generates the trial balance (ordinary entries only).
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn trial_balance(&self, year: i32) -> Result<TrialBalanceReport, ReportError> {
        let snapshot = self.snapshot(year).await?;
        Ok(ReportBuilder::trial_balance(
            year,
            &snapshot.accounts,
            &snapshot.entries,
        ))
    }

    /// Generates the adjusted trial balance.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn adjusted_trial_balance(
        &self,
        year: i32,
    ) -> Result<AdjustedTrialBalanceReport, ReportError> {
        let snapshot = self.snapshot(year).await?;
        Ok(ReportBuilder::adjusted_trial_balance(
            year,
            &snapshot.accounts,
            &snapshot.entries,
        ))
    }

    /// Generates the income statement.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn income_statement(
        &self,
        year: i32,
    ) -> Result<IncomeStatementReport, ReportError> {
        let snapshot = self.snapshot(year).await?;
        Ok(ReportBuilder::income_statement(
            year,
            &snapshot.accounts,
            &snapshot.entries,
        ))
    }

    /// Generates the statement of changes in equity.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn equity_changes(&self, year: i32) -> Result<EquityChangesReport, ReportError> {
        let snapshot = self.snapshot(year).await?;
        Ok(ReportBuilder::equity_changes(
            year,
            &snapshot.accounts,
            &snapshot.entries,
        ))
    }

    /// Generates the balance sheet under the configured classification
    /// rule.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn balance_sheet(
        &self,
        year: i32,
        config: &ReportConfig,
    ) -> Result<BalanceSheetReport, ReportError> {
        let snapshot = self.snapshot(year).await?;
        Ok(ReportBuilder::balance_sheet(
            year,
            &snapshot.accounts,
            &snapshot.entries,
            config,
        ))
    }

    /// Generates the general ledger view.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn general_ledger(&self, year: i32) -> Result<GeneralLedgerReport, ReportError> {
        let snapshot = self.snapshot(year).await?;
        Ok(ReportBuilder::general_ledger(
            year,
            &snapshot.accounts,
            &snapshot.entries,
        ))
    }

    /// Generates the dashboard summary of a year.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn summary(&self, year: i32) -> Result<YearSummary, ReportError> {
        let state = ClosingRepository::new(self.db.clone()).state(year).await?;
        let snapshot = self.snapshot(year).await?;
        Ok(ReportBuilder::summary(
            year,
            &snapshot.accounts,
            &snapshot.entries,
            state,
        ))
    }
}
