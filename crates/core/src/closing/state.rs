//! The per-year adjustment lifecycle state machine.
//!
//! Each fiscal year is either `Open` (ordinary-entry phase) or
//! `Adjusting` (adjustment phase). A year with no stored closing record
//! is `Open` by definition; the storage layer maps an absent row to
//! [`ClosingState::default`]. Years cycle between the two states
//! indefinitely - there is no terminal state.

use serde::{Deserialize, Serialize};

use super::error::ClosingError;

/// Posting phase of a fiscal year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClosingState {
    /// Ordinary-entry phase; the initial and default state.
    #[default]
    Open,
    /// Adjustment phase; only adjusting entries may be newly posted.
    Adjusting,
}

impl ClosingState {
    /// Maps the stored `is_closed` flag to a state.
    #[must_use]
    pub const fn from_is_closed(is_closed: bool) -> Self {
        if is_closed { Self::Adjusting } else { Self::Open }
    }

    /// Returns the stored `is_closed` flag for this state.
    #[must_use]
    pub const fn is_adjusting(self) -> bool {
        matches!(self, Self::Adjusting)
    }
}

impl std::fmt::Display for ClosingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => f.write_str("open"),
            Self::Adjusting => f.write_str("adjusting"),
        }
    }
}

/// Outcome of a `begin_adjustment` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeginAdjustmentOutcome {
    /// The year entered the adjustment phase.
    Began,
    /// The year was already in the adjustment phase; nothing changed.
    /// Reported as a warning, not an error.
    AlreadyAdjusting,
}

/// Transitions a year into the adjustment phase.
///
/// `current` is the stored state, or `None` when no closing record exists
/// yet (implicitly `Open`). Beginning adjustment on an already-adjusting
/// year is a warning, never a failure.
#[must_use]
pub fn begin_adjustment(current: Option<ClosingState>) -> BeginAdjustmentOutcome {
    match current.unwrap_or_default() {
        ClosingState::Open => BeginAdjustmentOutcome::Began,
        ClosingState::Adjusting => BeginAdjustmentOutcome::AlreadyAdjusting,
    }
}

/// Transitions a year back to the ordinary-entry phase.
///
/// `current` is the stored state, or `None` when no closing record exists.
///
/// # Errors
///
/// Returns `NoClosingRecord` when the year has never entered the
/// adjustment phase - there is nothing to reopen.
pub fn reopen(year: i32, current: Option<ClosingState>) -> Result<ClosingState, ClosingError> {
    match current {
        None => Err(ClosingError::NoClosingRecord { year }),
        Some(_) => Ok(ClosingState::Open),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_open() {
        assert_eq!(ClosingState::default(), ClosingState::Open);
        assert_eq!(ClosingState::from_is_closed(false), ClosingState::Open);
        assert_eq!(ClosingState::from_is_closed(true), ClosingState::Adjusting);
    }

    #[test]
    fn test_begin_adjustment_from_open() {
        assert_eq!(
            begin_adjustment(Some(ClosingState::Open)),
            BeginAdjustmentOutcome::Began
        );
    }

    #[test]
    fn test_begin_adjustment_without_record() {
        // No record means the year is open; the transition proceeds.
        assert_eq!(begin_adjustment(None), BeginAdjustmentOutcome::Began);
    }

    #[test]
    fn test_begin_adjustment_is_idempotent_with_warning() {
        assert_eq!(
            begin_adjustment(Some(ClosingState::Adjusting)),
            BeginAdjustmentOutcome::AlreadyAdjusting
        );
    }

    #[test]
    fn test_reopen_requires_record() {
        assert!(matches!(
            reopen(2024, None),
            Err(ClosingError::NoClosingRecord { year: 2024 })
        ));
    }

    #[test]
    fn test_reopen_from_adjusting() {
        assert_eq!(
            reopen(2024, Some(ClosingState::Adjusting)).unwrap(),
            ClosingState::Open
        );
    }

    #[test]
    fn test_years_can_cycle() {
        // Open -> Adjusting -> Open -> Adjusting, indefinitely.
        let mut state = ClosingState::default();
        for _ in 0..3 {
            assert_eq!(begin_adjustment(Some(state)), BeginAdjustmentOutcome::Began);
            state = ClosingState::Adjusting;
            state = reopen(2024, Some(state)).unwrap();
        }
        assert_eq!(state, ClosingState::Open);
    }
}
