//! Error types for journal engine operations.

use rust_decimal::Decimal;
use saldo_shared::types::EntryId;
use thiserror::Error;

/// Errors that can occur while posting, replacing, or deleting journal
/// entries.
#[derive(Debug, Error)]
pub enum JournalError {
    /// A required header field was left empty.
    #[error("Journal entry {0} is required")]
    Validation(&'static str),

    /// No line survived filtering (resolved account, positive amount).
    #[error("Journal entry must have at least one valid line")]
    EmptyEntry,

    /// Debits and credits differ beyond the balance tolerance.
    #[error("Journal entry is not balanced. Debit: {debit}, Credit: {credit}")]
    Unbalanced {
        /// Sum of debit line amounts.
        debit: Decimal,
        /// Sum of credit line amounts.
        credit: Decimal,
    },

    /// An adjusting entry was posted while the year is still open.
    #[error("Year {year} is not in the adjustment phase; adjusting entries cannot be posted")]
    PeriodClosedForAdjustment {
        /// The fiscal year.
        year: i32,
    },

    /// An ordinary entry was posted while the year is in adjustment.
    #[error("Year {year} is in the adjustment phase; ordinary entries cannot be posted")]
    PeriodInAdjustment {
        /// The fiscal year.
        year: i32,
    },

    /// Journal entry not found.
    #[error("Journal entry not found: {0}")]
    NotFound(EntryId),
}

impl JournalError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::EmptyEntry => "EMPTY_ENTRY",
            Self::Unbalanced { .. } => "UNBALANCED_ENTRY",
            Self::PeriodClosedForAdjustment { .. } => "PERIOD_CLOSED_FOR_ADJUSTMENT",
            Self::PeriodInAdjustment { .. } => "PERIOD_IN_ADJUSTMENT",
            Self::NotFound(_) => "ENTRY_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            JournalError::Validation("number").error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(JournalError::EmptyEntry.error_code(), "EMPTY_ENTRY");
        assert_eq!(
            JournalError::Unbalanced {
                debit: dec!(500),
                credit: dec!(400),
            }
            .error_code(),
            "UNBALANCED_ENTRY"
        );
        assert_eq!(
            JournalError::PeriodClosedForAdjustment { year: 2024 }.error_code(),
            "PERIOD_CLOSED_FOR_ADJUSTMENT"
        );
        assert_eq!(
            JournalError::PeriodInAdjustment { year: 2024 }.error_code(),
            "PERIOD_IN_ADJUSTMENT"
        );
    }

    #[test]
    fn test_error_display() {
        let err = JournalError::Unbalanced {
            debit: dec!(500.00),
            credit: dec!(400.00),
        };
        assert_eq!(
            err.to_string(),
            "Journal entry is not balanced. Debit: 500.00, Credit: 400.00"
        );

        assert_eq!(
            JournalError::Validation("number").to_string(),
            "Journal entry number is required"
        );
    }
}
