//! Report generation.
//!
//! All builders are pure functions over the chart of accounts and the
//! year's journal entries: they never mutate the ledger and produce
//! identical output for identical input.

use rust_decimal::Decimal;
use saldo_shared::config::ReportConfig;

use super::types::{
    AdjustedTrialBalanceReport, BalanceSheetReport, DataIntegrityWarning, EquityChangesReport,
    GeneralLedgerReport, IncomeStatementReport, LedgerAccountView, SectionLine, TrialBalanceReport,
    TrialBalanceRow, YearSummary,
};
use crate::balance::{period_totals, running_balance};
use crate::catalog::{Account, AccountType};
use crate::closing::ClosingState;
use crate::journal::{EntryKind, JournalEntry, balance_tolerance};
use crate::reports::classify::{AssetClass, LiabilityClass, classify_asset, classify_liability};

/// Service for generating financial reports.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Generates the trial balance over ordinary entries only.
    ///
    /// Each active account's totals are netted into a single
    /// debit-or-credit column; accounts with no activity are omitted.
    #[must_use]
    pub fn trial_balance(
        year: i32,
        accounts: &[Account],
        entries: &[JournalEntry],
    ) -> TrialBalanceReport {
        let mut rows = Vec::new();
        let mut total_debit = Decimal::ZERO;
        let mut total_credit = Decimal::ZERO;

        for account in sorted_by_code(accounts).into_iter().filter(|a| a.is_active) {
            let totals = period_totals(entries, account.id, year, Some(EntryKind::Ordinary));
            if totals.is_zero() {
                continue;
            }

            // Larger side wins the column; the other is zero.
            let (debit, credit) = if totals.debit >= totals.credit {
                (totals.debit - totals.credit, Decimal::ZERO)
            } else {
                (Decimal::ZERO, totals.credit - totals.debit)
            };

            total_debit += debit;
            total_credit += credit;
            rows.push(TrialBalanceRow {
                code: account.code.clone(),
                name: account.name.clone(),
                debit,
                credit,
            });
        }

        TrialBalanceReport {
            year,
            rows,
            total_debit,
            total_credit,
            is_balanced: (total_debit - total_credit).abs() <= balance_tolerance(),
        }
    }

    /// Generates the trial balance after adjusting entries.
    ///
    /// Opening balance is the ordinary-entries net (debit-positive);
    /// the closing balance adds the adjusting-entry effect. Accounts
    /// whose closing balance is within tolerance of zero are omitted.
    #[must_use]
    pub fn adjusted_trial_balance(
        year: i32,
        accounts: &[Account],
        entries: &[JournalEntry],
    ) -> AdjustedTrialBalanceReport {
        let mut rows = Vec::new();
        let mut total_debit = Decimal::ZERO;
        let mut total_credit = Decimal::ZERO;

        for account in sorted_by_code(accounts).into_iter().filter(|a| a.is_active) {
            let ordinary = period_totals(entries, account.id, year, Some(EntryKind::Ordinary));
            let adjusting = period_totals(entries, account.id, year, Some(EntryKind::Adjusting));

            let opening = ordinary.debit_minus_credit();
            let closing = opening + adjusting.debit - adjusting.credit;
            if closing.abs() <= balance_tolerance() {
                continue;
            }

            let (debit, credit) = if closing >= Decimal::ZERO {
                (closing, Decimal::ZERO)
            } else {
                (Decimal::ZERO, closing.abs())
            };

            total_debit += debit;
            total_credit += credit;
            rows.push(TrialBalanceRow {
                code: account.code.clone(),
                name: account.name.clone(),
                debit,
                credit,
            });
        }

        AdjustedTrialBalanceReport {
            year,
            rows,
            total_debit,
            total_credit,
            is_balanced: (total_debit - total_credit).abs() <= balance_tolerance(),
        }
    }

    /// Generates the income statement over both entry kinds.
    ///
    /// Zero-balance accounts are omitted from the line items; the totals
    /// are unaffected by the omission.
    #[must_use]
    pub fn income_statement(
        year: i32,
        accounts: &[Account],
        entries: &[JournalEntry],
    ) -> IncomeStatementReport {
        let mut revenue = Vec::new();
        let mut expenses = Vec::new();
        let mut total_revenue = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;

        for account in sorted_by_code(accounts) {
            let totals = period_totals(entries, account.id, year, None);
            let amount = totals.net(account.account_type.normal_balance());

            match account.account_type {
                AccountType::Revenue => {
                    total_revenue += amount;
                    if !amount.is_zero() {
                        revenue.push(SectionLine {
                            label: account.name.clone(),
                            amount,
                        });
                    }
                }
                AccountType::Expense => {
                    total_expense += amount;
                    if !amount.is_zero() {
                        expenses.push(SectionLine {
                            label: account.name.clone(),
                            amount,
                        });
                    }
                }
                _ => {}
            }
        }

        IncomeStatementReport {
            year,
            revenue,
            total_revenue,
            expenses,
            total_expense,
            net_income: total_revenue - total_expense,
        }
    }

    /// Generates the statement of changes in equity.
    ///
    /// `ending_capital = total_equity + net_income - total_drawings`.
    /// Prive accounts are debit-normal, so drawings come out positive.
    #[must_use]
    pub fn equity_changes(
        year: i32,
        accounts: &[Account],
        entries: &[JournalEntry],
    ) -> EquityChangesReport {
        let net_income = Self::income_statement(year, accounts, entries).net_income;

        let mut equity = Vec::new();
        let mut drawings = Vec::new();
        let mut total_equity = Decimal::ZERO;
        let mut total_drawings = Decimal::ZERO;

        for account in sorted_by_code(accounts) {
            let totals = period_totals(entries, account.id, year, None);
            let amount = totals.net(account.account_type.normal_balance());

            match account.account_type {
                AccountType::Equity => {
                    total_equity += amount;
                    equity.push(SectionLine {
                        label: account.name.clone(),
                        amount,
                    });
                }
                AccountType::Prive => {
                    total_drawings += amount;
                    drawings.push(SectionLine {
                        label: account.name.clone(),
                        amount,
                    });
                }
                _ => {}
            }
        }

        EquityChangesReport {
            year,
            equity,
            total_equity,
            drawings,
            total_drawings,
            net_income,
            ending_capital: total_equity + net_income - total_drawings,
        }
    }

    /// Generates the balance sheet.
    ///
    /// Assets split current/fixed and liabilities current/long-term per
    /// the configured classification rule. A violated accounting identity
    /// is surfaced as a warning on the report, never hidden.
    #[must_use]
    pub fn balance_sheet(
        year: i32,
        accounts: &[Account],
        entries: &[JournalEntry],
        config: &ReportConfig,
    ) -> BalanceSheetReport {
        let ending_capital = Self::equity_changes(year, accounts, entries).ending_capital;

        let mut current_assets = Vec::new();
        let mut fixed_assets = Vec::new();
        let mut current_liabilities = Vec::new();
        let mut long_term_liabilities = Vec::new();
        let mut total_current_assets = Decimal::ZERO;
        let mut total_fixed_assets = Decimal::ZERO;
        let mut total_current_liabilities = Decimal::ZERO;
        let mut total_long_term_liabilities = Decimal::ZERO;

        for account in sorted_by_code(accounts) {
            let totals = period_totals(entries, account.id, year, None);
            let amount = totals.net(account.account_type.normal_balance());
            let line = SectionLine {
                label: account.name.clone(),
                amount,
            };

            match account.account_type {
                AccountType::Asset => match classify_asset(config, account) {
                    AssetClass::Current => {
                        total_current_assets += amount;
                        current_assets.push(line);
                    }
                    AssetClass::Fixed => {
                        total_fixed_assets += amount;
                        fixed_assets.push(line);
                    }
                },
                AccountType::Liability => match classify_liability(config, account) {
                    LiabilityClass::Current => {
                        total_current_liabilities += amount;
                        current_liabilities.push(line);
                    }
                    LiabilityClass::LongTerm => {
                        total_long_term_liabilities += amount;
                        long_term_liabilities.push(line);
                    }
                },
                _ => {}
            }
        }

        let total_assets = total_current_assets + total_fixed_assets;
        let total_liabilities = total_current_liabilities + total_long_term_liabilities;
        let total_liabilities_and_equity = total_liabilities + ending_capital;

        let difference = total_assets - total_liabilities_and_equity;
        let is_balanced = difference.abs() <= balance_tolerance();
        let warning = if is_balanced {
            None
        } else {
            Some(DataIntegrityWarning {
                message: format!(
                    "Balance sheet does not balance: assets {total_assets}, \
                     liabilities and equity {total_liabilities_and_equity}"
                ),
                difference,
            })
        };

        BalanceSheetReport {
            year,
            current_assets,
            total_current_assets,
            fixed_assets,
            total_fixed_assets,
            total_assets,
            current_liabilities,
            total_current_liabilities,
            long_term_liabilities,
            total_long_term_liabilities,
            total_liabilities,
            ending_capital,
            total_liabilities_and_equity,
            is_balanced,
            warning,
        }
    }

    /// Generates the general ledger: a running-balance view per active
    /// account, ordered by code.
    #[must_use]
    pub fn general_ledger(
        year: i32,
        accounts: &[Account],
        entries: &[JournalEntry],
    ) -> GeneralLedgerReport {
        let accounts = sorted_by_code(accounts)
            .into_iter()
            .filter(|a| a.is_active)
            .map(|account| LedgerAccountView {
                account_id: account.id,
                code: account.code.clone(),
                name: account.name.clone(),
                rows: running_balance(entries, account.id, year),
            })
            .collect();

        GeneralLedgerReport { year, accounts }
    }

    /// Generates the dashboard summary of a year.
    #[must_use]
    pub fn summary(
        year: i32,
        accounts: &[Account],
        entries: &[JournalEntry],
        closing_state: ClosingState,
    ) -> YearSummary {
        let income = Self::income_statement(year, accounts, entries);

        let mut total_assets = Decimal::ZERO;
        let mut total_liabilities = Decimal::ZERO;
        let mut total_equity = Decimal::ZERO;

        for account in accounts {
            let totals = period_totals(entries, account.id, year, None);
            let amount = totals.net(account.account_type.normal_balance());
            match account.account_type {
                AccountType::Asset => total_assets += amount,
                AccountType::Liability => total_liabilities += amount,
                AccountType::Equity => total_equity += amount,
                _ => {}
            }
        }

        YearSummary {
            year,
            total_revenue: income.total_revenue,
            total_expense: income.total_expense,
            net_income: income.net_income,
            total_assets,
            total_liabilities,
            total_equity,
            closing_state,
        }
    }
}

/// Returns the accounts ordered by code.
fn sorted_by_code(accounts: &[Account]) -> Vec<&Account> {
    let mut sorted: Vec<&Account> = accounts.iter().collect();
    sorted.sort_by(|a, b| a.code.cmp(&b.code));
    sorted
}
