//! The journal posting pipeline: fail-fast validation in a fixed order.
//!
//! Checks run in the order the period-closing design requires:
//! 1. closing-state gate for the entry kind
//! 2. required header fields
//! 3. line filtering (resolved account, positive amount), non-empty
//! 4. balance within tolerance
//!
//! No mutation happens before every check has passed; the storage layer
//! persists the returned [`PreparedEntry`] atomically.

use rust_decimal::Decimal;
use saldo_shared::types::AccountId;

use super::error::JournalError;
use super::types::{EntryKind, EntryTotals, JournalEntryInput, PostedLine, PreparedEntry};
use crate::closing::ClosingState;

/// Tolerance for the debit/credit balance check.
///
/// Stored amounts are fixed-point with 2 fractional digits; the tolerance
/// only absorbs float-to-decimal noise from UI callers.
#[must_use]
pub fn balance_tolerance() -> Decimal {
    Decimal::new(1, 3) // 0.001
}

/// Validates that the closing state of a year permits posting the given
/// entry kind.
///
/// # Errors
///
/// - `PeriodClosedForAdjustment` when an adjusting entry is posted while
///   the year is open.
/// - `PeriodInAdjustment` when an ordinary entry is posted while the year
///   is in the adjustment phase.
pub fn validate_period_gate(
    year: i32,
    kind: EntryKind,
    state: ClosingState,
) -> Result<(), JournalError> {
    match (kind, state) {
        (EntryKind::Adjusting, ClosingState::Open) => {
            Err(JournalError::PeriodClosedForAdjustment { year })
        }
        (EntryKind::Ordinary, ClosingState::Adjusting) => {
            Err(JournalError::PeriodInAdjustment { year })
        }
        _ => Ok(()),
    }
}

/// Validates a new entry for posting.
///
/// `resolve_account` reports whether an account id exists in the chart of
/// accounts; lines referencing unknown accounts are dropped by filtering,
/// the same way unselected form rows are.
///
/// # Errors
///
/// Returns the first failing check, in pipeline order. Nothing is
/// persisted on failure.
pub fn validate_post<R>(
    year: i32,
    kind: EntryKind,
    state: ClosingState,
    input: &JournalEntryInput,
    resolve_account: R,
) -> Result<PreparedEntry, JournalError>
where
    R: Fn(AccountId) -> bool,
{
    validate_period_gate(year, kind, state)?;
    validate_replacement(input, resolve_account)
}

/// Validates the header and lines of an entry, without the period gate.
///
/// Used both by `validate_post` and by full-entry replacement, which is
/// never gated by the closing state.
///
/// # Errors
///
/// - `Validation` when `number` or `description` is empty.
/// - `EmptyEntry` when no line survives filtering.
/// - `Unbalanced` when debits and credits differ beyond tolerance.
pub fn validate_replacement<R>(
    input: &JournalEntryInput,
    resolve_account: R,
) -> Result<PreparedEntry, JournalError>
where
    R: Fn(AccountId) -> bool,
{
    if input.number.trim().is_empty() {
        return Err(JournalError::Validation("number"));
    }
    if input.description.trim().is_empty() {
        return Err(JournalError::Validation("description"));
    }

    let lines = filter_lines(input, resolve_account);
    if lines.is_empty() {
        return Err(JournalError::EmptyEntry);
    }

    let totals = EntryTotals::from_lines(&lines);
    if !totals.is_balanced() {
        return Err(JournalError::Unbalanced {
            debit: totals.debit,
            credit: totals.credit,
        });
    }

    Ok(PreparedEntry { lines, totals })
}

/// Keeps lines with a resolved, existing account and a positive amount.
fn filter_lines<R>(input: &JournalEntryInput, resolve_account: R) -> Vec<PostedLine>
where
    R: Fn(AccountId) -> bool,
{
    input
        .lines
        .iter()
        .filter_map(|line| {
            let account_id = line.account_id?;
            if line.amount <= Decimal::ZERO || !resolve_account(account_id) {
                return None;
            }
            Some(PostedLine {
                account_id,
                is_debit: line.is_debit,
                amount: line.amount,
                tax: line.tax,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::types::JournalLineInput;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn any_account() -> AccountId {
        AccountId::new()
    }

    fn line(account_id: Option<AccountId>, is_debit: bool, amount: Decimal) -> JournalLineInput {
        JournalLineInput {
            account_id,
            is_debit,
            amount,
            tax: None,
        }
    }

    fn input(lines: Vec<JournalLineInput>) -> JournalEntryInput {
        JournalEntryInput {
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            number: "JV-001".to_string(),
            description: "Test entry".to_string(),
            lines,
            created_by: None,
        }
    }

    fn all_accounts_exist(_id: AccountId) -> bool {
        true
    }

    #[test]
    fn test_gate_ordinary_in_open() {
        assert!(validate_period_gate(2024, EntryKind::Ordinary, ClosingState::Open).is_ok());
    }

    #[test]
    fn test_gate_adjusting_in_adjusting() {
        assert!(validate_period_gate(2024, EntryKind::Adjusting, ClosingState::Adjusting).is_ok());
    }

    #[test]
    fn test_gate_adjusting_in_open_rejected() {
        assert!(matches!(
            validate_period_gate(2024, EntryKind::Adjusting, ClosingState::Open),
            Err(JournalError::PeriodClosedForAdjustment { year: 2024 })
        ));
    }

    #[test]
    fn test_gate_ordinary_in_adjusting_rejected() {
        assert!(matches!(
            validate_period_gate(2024, EntryKind::Ordinary, ClosingState::Adjusting),
            Err(JournalError::PeriodInAdjustment { year: 2024 })
        ));
    }

    #[test]
    fn test_valid_post() {
        let account = any_account();
        let other = any_account();
        let input = input(vec![
            line(Some(account), true, dec!(1000)),
            line(Some(other), false, dec!(1000)),
        ]);

        let prepared = validate_post(
            2024,
            EntryKind::Ordinary,
            ClosingState::Open,
            &input,
            all_accounts_exist,
        )
        .unwrap();

        assert_eq!(prepared.lines.len(), 2);
        assert_eq!(prepared.totals.debit, dec!(1000));
        assert_eq!(prepared.totals.credit, dec!(1000));
    }

    #[test]
    fn test_gate_checked_before_field_validation() {
        // An entry that would also fail field validation still reports
        // the gate error first.
        let mut bad = input(vec![]);
        bad.number = String::new();

        let result = validate_post(
            2024,
            EntryKind::Adjusting,
            ClosingState::Open,
            &bad,
            all_accounts_exist,
        );
        assert!(matches!(
            result,
            Err(JournalError::PeriodClosedForAdjustment { .. })
        ));
    }

    #[test]
    fn test_missing_number() {
        let mut bad = input(vec![line(Some(any_account()), true, dec!(10))]);
        bad.number = "  ".to_string();

        assert!(matches!(
            validate_replacement(&bad, all_accounts_exist),
            Err(JournalError::Validation("number"))
        ));
    }

    #[test]
    fn test_missing_description() {
        let mut bad = input(vec![line(Some(any_account()), true, dec!(10))]);
        bad.description = String::new();

        assert!(matches!(
            validate_replacement(&bad, all_accounts_exist),
            Err(JournalError::Validation("description"))
        ));
    }

    #[test]
    fn test_unselected_and_zero_lines_filtered() {
        let account = any_account();
        let other = any_account();
        let input = input(vec![
            line(None, true, dec!(999)),          // no account selected
            line(Some(account), true, dec!(0)),   // zero amount
            line(Some(account), true, dec!(-5)),  // negative amount
            line(Some(account), true, dec!(500)),
            line(Some(other), false, dec!(500)),
        ]);

        let prepared = validate_replacement(&input, all_accounts_exist).unwrap();
        assert_eq!(prepared.lines.len(), 2);
        assert!(prepared.totals.is_balanced());
    }

    #[test]
    fn test_unknown_account_filtered() {
        let known = any_account();
        let unknown = any_account();
        let resolver = move |id: AccountId| id == known;

        let input = input(vec![
            line(Some(unknown), true, dec!(100)),
            line(Some(known), true, dec!(100)),
            line(Some(known), false, dec!(100)),
        ]);

        let prepared = validate_replacement(&input, resolver).unwrap();
        assert_eq!(prepared.lines.len(), 2);
    }

    #[test]
    fn test_empty_after_filtering() {
        let input = input(vec![line(None, true, dec!(100)), line(None, false, dec!(0))]);

        assert!(matches!(
            validate_replacement(&input, all_accounts_exist),
            Err(JournalError::EmptyEntry)
        ));
    }

    #[test]
    fn test_unbalanced_rejected() {
        // Scenario: debit 500 / credit 400 must be rejected with both
        // totals reported, and nothing prepared.
        let input = input(vec![
            line(Some(any_account()), true, dec!(500)),
            line(Some(any_account()), false, dec!(400)),
        ]);

        let result = validate_replacement(&input, all_accounts_exist);
        match result {
            Err(JournalError::Unbalanced { debit, credit }) => {
                assert_eq!(debit, dec!(500));
                assert_eq!(credit, dec!(400));
            }
            other => panic!("expected Unbalanced, got {other:?}"),
        }
    }

    #[test]
    fn test_imbalance_within_tolerance_accepted() {
        let input = input(vec![
            line(Some(any_account()), true, dec!(100.0004)),
            line(Some(any_account()), false, dec!(100.00)),
        ]);

        assert!(validate_replacement(&input, all_accounts_exist).is_ok());
    }
}
