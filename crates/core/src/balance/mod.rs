//! Account balance calculations.
//!
//! The balance calculator turns an account's journal lines into period
//! totals, a net balance honoring the account's normal side, and the
//! running-balance rows of a ledger view.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use saldo_shared::types::AccountId;
use serde::{Deserialize, Serialize};

use crate::catalog::NormalBalance;
use crate::journal::{EntryKind, JournalEntry};

/// Debit and credit totals of an account over a period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Sum of debit line amounts.
    pub debit: Decimal,
    /// Sum of credit line amounts.
    pub credit: Decimal,
}

impl PeriodTotals {
    /// Accumulates one line.
    pub fn add_line(&mut self, is_debit: bool, amount: Decimal) {
        if is_debit {
            self.debit += amount;
        } else {
            self.credit += amount;
        }
    }

    /// Returns `debit - credit`, the debit-positive sign convention used
    /// by the adjusted trial balance.
    #[must_use]
    pub fn debit_minus_credit(self) -> Decimal {
        self.debit - self.credit
    }

    /// Nets the totals by the account's normal-balance side.
    #[must_use]
    pub fn net(self, normal: NormalBalance) -> Decimal {
        normal.net(self.debit, self.credit)
    }

    /// Whether both totals are zero (the account saw no activity).
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.debit.is_zero() && self.credit.is_zero()
    }
}

/// Sums an account's lines over entries of a fiscal year.
///
/// `kind` restricts the calculation to ordinary or adjusting entries;
/// `None` includes both.
#[must_use]
pub fn period_totals(
    entries: &[JournalEntry],
    account_id: AccountId,
    year: i32,
    kind: Option<EntryKind>,
) -> PeriodTotals {
    let mut totals = PeriodTotals::default();
    for entry in entries {
        if entry.date.year() != year {
            continue;
        }
        if let Some(kind) = kind
            && entry.kind != kind
        {
            continue;
        }
        for line in &entry.lines {
            if line.account_id == account_id {
                totals.add_line(line.is_debit, line.amount);
            }
        }
    }
    totals
}

/// One row of an account's ledger view.
///
/// The running total is carried as a signed accumulator and reported
/// split across the two balance columns: the debit column when the
/// total is non-negative, the credit column (absolute value) when it is
/// negative. At most one of the two is non-zero per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Date of the owning entry.
    pub date: NaiveDate,
    /// Reference number of the owning entry.
    pub number: String,
    /// Description of the owning entry.
    pub description: String,
    /// Debit amount of this line (zero for credit lines).
    pub debit: Decimal,
    /// Credit amount of this line (zero for debit lines).
    pub credit: Decimal,
    /// Running total shown on the debit side.
    pub balance_debit: Decimal,
    /// Running total shown on the credit side (absolute value).
    pub balance_credit: Decimal,
}

/// Builds the running-balance rows for an account over a fiscal year.
///
/// Lines are ordered by `(date, number)` of their owning entries, then by
/// posting order within an entry.
#[must_use]
pub fn running_balance(
    entries: &[JournalEntry],
    account_id: AccountId,
    year: i32,
) -> Vec<LedgerRow> {
    let mut in_year: Vec<&JournalEntry> = entries
        .iter()
        .filter(|e| e.date.year() == year)
        .collect();
    in_year.sort_by(|a, b| (a.date, &a.number).cmp(&(b.date, &b.number)));

    let mut rows = Vec::new();
    let mut running = Decimal::ZERO;

    for entry in in_year {
        for line in &entry.lines {
            if line.account_id != account_id {
                continue;
            }

            let (debit, credit) = if line.is_debit {
                (line.amount, Decimal::ZERO)
            } else {
                (Decimal::ZERO, line.amount)
            };
            running += debit - credit;

            let (balance_debit, balance_credit) = if running >= Decimal::ZERO {
                (running, Decimal::ZERO)
            } else {
                (Decimal::ZERO, running.abs())
            };

            rows.push(LedgerRow {
                date: entry.date,
                number: entry.number.clone(),
                description: entry.description.clone(),
                debit,
                credit,
                balance_debit,
                balance_credit,
            });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use saldo_shared::types::{EntryId, LineId};

    use crate::journal::JournalLine;

    fn entry(
        date: NaiveDate,
        number: &str,
        kind: EntryKind,
        lines: Vec<(AccountId, bool, Decimal)>,
    ) -> JournalEntry {
        JournalEntry {
            id: EntryId::new(),
            date,
            number: number.to_string(),
            description: format!("entry {number}"),
            kind,
            created_by: None,
            created_at: Utc::now(),
            lines: lines
                .into_iter()
                .map(|(account_id, is_debit, amount)| JournalLine {
                    id: LineId::new(),
                    account_id,
                    is_debit,
                    amount,
                    tax: None,
                })
                .collect(),
        }
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_period_totals_by_kind() {
        let cash = AccountId::new();
        let revenue = AccountId::new();
        let entries = vec![
            entry(
                date(2024, 1, 10),
                "JV-1",
                EntryKind::Ordinary,
                vec![(cash, true, dec!(1000)), (revenue, false, dec!(1000))],
            ),
            entry(
                date(2024, 12, 31),
                "AJ-1",
                EntryKind::Adjusting,
                vec![(cash, false, dec!(200)), (revenue, true, dec!(200))],
            ),
        ];

        let ordinary = period_totals(&entries, cash, 2024, Some(EntryKind::Ordinary));
        assert_eq!(ordinary.debit, dec!(1000));
        assert_eq!(ordinary.credit, Decimal::ZERO);

        let adjusting = period_totals(&entries, cash, 2024, Some(EntryKind::Adjusting));
        assert_eq!(adjusting.debit, Decimal::ZERO);
        assert_eq!(adjusting.credit, dec!(200));

        let both = period_totals(&entries, cash, 2024, None);
        assert_eq!(both.debit, dec!(1000));
        assert_eq!(both.credit, dec!(200));
    }

    #[test]
    fn test_period_totals_exclude_other_years() {
        let cash = AccountId::new();
        let entries = vec![
            entry(
                date(2023, 12, 31),
                "JV-0",
                EntryKind::Ordinary,
                vec![(cash, true, dec!(500))],
            ),
            entry(
                date(2024, 1, 1),
                "JV-1",
                EntryKind::Ordinary,
                vec![(cash, true, dec!(100))],
            ),
        ];

        let totals = period_totals(&entries, cash, 2024, None);
        assert_eq!(totals.debit, dec!(100));
    }

    #[test]
    fn test_net_by_normal_side() {
        let totals = PeriodTotals {
            debit: dec!(300),
            credit: dec!(100),
        };
        assert_eq!(totals.net(NormalBalance::Debit), dec!(200));
        assert_eq!(totals.net(NormalBalance::Credit), dec!(-200));
    }

    #[test]
    fn test_running_balance_ordering_and_split() {
        let cash = AccountId::new();
        // Deliberately out of order; the calculator sorts by (date, number).
        let entries = vec![
            entry(
                date(2024, 3, 1),
                "JV-3",
                EntryKind::Ordinary,
                vec![(cash, false, dec!(700))],
            ),
            entry(
                date(2024, 1, 5),
                "JV-1",
                EntryKind::Ordinary,
                vec![(cash, true, dec!(500))],
            ),
            entry(
                date(2024, 2, 1),
                "JV-2",
                EntryKind::Ordinary,
                vec![(cash, true, dec!(100))],
            ),
        ];

        let rows = running_balance(&entries, cash, 2024);
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].number, "JV-1");
        assert_eq!(rows[0].balance_debit, dec!(500));
        assert_eq!(rows[0].balance_credit, Decimal::ZERO);

        assert_eq!(rows[1].number, "JV-2");
        assert_eq!(rows[1].balance_debit, dec!(600));

        // Running total goes negative: reported on the credit side.
        assert_eq!(rows[2].number, "JV-3");
        assert_eq!(rows[2].balance_debit, Decimal::ZERO);
        assert_eq!(rows[2].balance_credit, dec!(100));
    }

    #[test]
    fn test_running_balance_same_date_sorted_by_number() {
        let cash = AccountId::new();
        let entries = vec![
            entry(
                date(2024, 1, 5),
                "JV-2",
                EntryKind::Ordinary,
                vec![(cash, true, dec!(10))],
            ),
            entry(
                date(2024, 1, 5),
                "JV-1",
                EntryKind::Ordinary,
                vec![(cash, true, dec!(20))],
            ),
        ];

        let rows = running_balance(&entries, cash, 2024);
        assert_eq!(rows[0].number, "JV-1");
        assert_eq!(rows[1].number, "JV-2");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// *For any* sequence of lines, at most one balance column is
        /// non-zero per row, and the final running total equals the sum
        /// of signed amounts.
        #[test]
        fn prop_running_balance_split_is_exclusive(
            amounts in prop::collection::vec((any::<bool>(), 1i64..1_000_000), 1..20),
        ) {
            let cash = AccountId::new();
            let lines: Vec<(AccountId, bool, Decimal)> = amounts
                .iter()
                .map(|&(is_debit, n)| (cash, is_debit, Decimal::new(n, 2)))
                .collect();
            let entries = vec![entry(date(2024, 1, 1), "JV-1", EntryKind::Ordinary, lines)];

            let rows = running_balance(&entries, cash, 2024);
            prop_assert_eq!(rows.len(), amounts.len());

            for row in &rows {
                prop_assert!(
                    row.balance_debit.is_zero() || row.balance_credit.is_zero(),
                    "at most one balance column may be populated"
                );
            }

            let expected: Decimal = amounts
                .iter()
                .map(|&(is_debit, n)| {
                    let amount = Decimal::new(n, 2);
                    if is_debit { amount } else { -amount }
                })
                .sum();
            let last = rows.last().unwrap();
            let actual = last.balance_debit - last.balance_credit;
            prop_assert_eq!(actual, expected);
        }
    }
}
