//! Error types for closing lifecycle operations.

use thiserror::Error;

/// Errors that can occur during closing state transitions.
#[derive(Debug, Error)]
pub enum ClosingError {
    /// Reopen was requested for a year that has never entered the
    /// adjustment phase.
    #[error("Year {year} has no closing record to reopen")]
    NoClosingRecord {
        /// The fiscal year.
        year: i32,
    },
}

impl ClosingError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoClosingRecord { .. } => "NO_CLOSING_RECORD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ClosingError::NoClosingRecord { year: 2024 }.to_string(),
            "Year 2024 has no closing record to reopen"
        );
        assert_eq!(
            ClosingError::NoClosingRecord { year: 2024 }.error_code(),
            "NO_CLOSING_RECORD"
        );
    }
}
