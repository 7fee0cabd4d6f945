//! Journal domain types for entry creation and reporting.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use saldo_shared::types::{AccountId, EntryId, LineId, UserId};
use serde::{Deserialize, Serialize};

/// Kind of journal entry, tied to the posting phase of its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Day-to-day transaction, posted while the year is open.
    Ordinary,
    /// Period-end correction, posted during the adjustment phase.
    Adjusting,
}

impl EntryKind {
    /// Maps the stored `is_adjustment` flag to a kind.
    #[must_use]
    pub const fn from_is_adjustment(is_adjustment: bool) -> Self {
        if is_adjustment {
            Self::Adjusting
        } else {
            Self::Ordinary
        }
    }

    /// Returns the stored `is_adjustment` flag for this kind.
    #[must_use]
    pub const fn is_adjustment(self) -> bool {
        matches!(self, Self::Adjusting)
    }
}

/// One line of a journal entry as submitted by the caller.
///
/// The account may be unresolved (`None`) and the amount non-positive;
/// such lines are filtered out during validation rather than rejected,
/// because form-style callers submit fixed-size line grids with unused
/// rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLineInput {
    /// The account to post to, if one was selected.
    pub account_id: Option<AccountId>,
    /// Whether this line is a debit.
    pub is_debit: bool,
    /// Line amount; must be positive to survive filtering.
    pub amount: Decimal,
    /// Optional passthrough tax amount; informational only, never part
    /// of balance arithmetic.
    pub tax: Option<Decimal>,
}

/// A journal entry as submitted for posting or replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntryInput {
    /// Transaction date; the fiscal year is derived from this.
    pub date: NaiveDate,
    /// Human-facing reference number; required, not unique.
    pub number: String,
    /// Description; required.
    pub description: String,
    /// Submitted lines, prior to filtering.
    pub lines: Vec<JournalLineInput>,
    /// The user posting the entry.
    pub created_by: Option<UserId>,
}

/// A validated line ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostedLine {
    /// The account to post to.
    pub account_id: AccountId,
    /// Whether this line is a debit.
    pub is_debit: bool,
    /// Line amount (positive).
    pub amount: Decimal,
    /// Optional passthrough tax amount.
    pub tax: Option<Decimal>,
}

/// Debit/credit totals of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryTotals {
    /// Sum of debit line amounts.
    pub debit: Decimal,
    /// Sum of credit line amounts.
    pub credit: Decimal,
}

impl EntryTotals {
    /// Sums the lines into totals.
    #[must_use]
    pub fn from_lines(lines: &[PostedLine]) -> Self {
        let mut debit = Decimal::ZERO;
        let mut credit = Decimal::ZERO;
        for line in lines {
            if line.is_debit {
                debit += line.amount;
            } else {
                credit += line.amount;
            }
        }
        Self { debit, credit }
    }

    /// Returns the signed difference `debit - credit`.
    #[must_use]
    pub fn difference(self) -> Decimal {
        self.debit - self.credit
    }

    /// Whether debits equal credits within the balance tolerance.
    #[must_use]
    pub fn is_balanced(self) -> bool {
        self.difference().abs() <= super::validation::balance_tolerance()
    }
}

/// A validated entry: filtered lines plus their totals.
#[derive(Debug, Clone)]
pub struct PreparedEntry {
    /// Lines that survived filtering.
    pub lines: Vec<PostedLine>,
    /// Debit/credit totals of the surviving lines.
    pub totals: EntryTotals,
}

/// A posted journal line as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// Unique identifier.
    pub id: LineId,
    /// The account this line posts to.
    pub account_id: AccountId,
    /// Whether this line is a debit.
    pub is_debit: bool,
    /// Line amount.
    pub amount: Decimal,
    /// Optional passthrough tax amount.
    pub tax: Option<Decimal>,
}

impl JournalLine {
    /// Returns the signed amount: positive for debit, negative for credit.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        if self.is_debit {
            self.amount
        } else {
            -self.amount
        }
    }
}

/// A posted journal entry with its lines, as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier.
    pub id: EntryId,
    /// Transaction date.
    pub date: NaiveDate,
    /// Human-facing reference number.
    pub number: String,
    /// Description.
    pub description: String,
    /// Entry kind (ordinary or adjusting).
    pub kind: EntryKind,
    /// The user who posted the entry.
    pub created_by: Option<UserId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// The entry's lines, in posting order.
    pub lines: Vec<JournalLine>,
}

impl JournalEntry {
    /// Returns the fiscal year this entry belongs to, derived from its
    /// date.
    #[must_use]
    pub fn fiscal_year(&self) -> i32 {
        self.date.year()
    }
}
