//! Property-based tests for the journal posting pipeline.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use saldo_shared::types::AccountId;

use super::error::JournalError;
use super::types::{EntryKind, JournalEntryInput, JournalLineInput};
use super::validation::{validate_period_gate, validate_post, validate_replacement};
use crate::closing::ClosingState;

/// Strategy for positive 2-dp amounts.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for entry kinds.
fn kind_strategy() -> impl Strategy<Value = EntryKind> {
    prop_oneof![Just(EntryKind::Ordinary), Just(EntryKind::Adjusting)]
}

/// Strategy for closing states.
fn state_strategy() -> impl Strategy<Value = ClosingState> {
    prop_oneof![Just(ClosingState::Open), Just(ClosingState::Adjusting)]
}

/// Strategy for a balanced set of lines: each amount appears once as a
/// debit and once as a credit.
fn balanced_lines_strategy() -> impl Strategy<Value = Vec<JournalLineInput>> {
    prop::collection::vec(amount_strategy(), 1..8).prop_map(|amounts| {
        let mut lines = Vec::with_capacity(amounts.len() * 2);
        for amount in amounts {
            lines.push(JournalLineInput {
                account_id: Some(AccountId::new()),
                is_debit: true,
                amount,
                tax: None,
            });
            lines.push(JournalLineInput {
                account_id: Some(AccountId::new()),
                is_debit: false,
                amount,
                tax: None,
            });
        }
        lines
    })
}

fn make_input(lines: Vec<JournalLineInput>) -> JournalEntryInput {
    JournalEntryInput {
        date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        number: "JV-100".to_string(),
        description: "Property test".to_string(),
        lines,
        created_by: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* entry kind and closing state, the gate allows posting
    /// exactly when the kind matches the phase.
    #[test]
    fn prop_gate_matches_phase(kind in kind_strategy(), state in state_strategy()) {
        let result = validate_period_gate(2024, kind, state);
        match (kind, state) {
            (EntryKind::Ordinary, ClosingState::Open)
            | (EntryKind::Adjusting, ClosingState::Adjusting) => {
                prop_assert!(result.is_ok());
            }
            (EntryKind::Adjusting, ClosingState::Open) => {
                let matched = matches!(
                    result,
                    Err(JournalError::PeriodClosedForAdjustment { .. })
                );
                prop_assert!(matched);
            }
            (EntryKind::Ordinary, ClosingState::Adjusting) => {
                let matched = matches!(
                    result,
                    Err(JournalError::PeriodInAdjustment { .. })
                );
                prop_assert!(matched);
            }
        }
    }

    /// *For any* balanced line set, validation accepts the entry and the
    /// prepared totals are equal on both sides.
    #[test]
    fn prop_balanced_entries_accepted(lines in balanced_lines_strategy()) {
        let input = make_input(lines);
        let prepared = validate_replacement(&input, |_| true);

        let prepared = prepared.expect("balanced entry must validate");
        prop_assert_eq!(prepared.totals.debit, prepared.totals.credit);
        prop_assert!(prepared.totals.is_balanced());
    }

    /// *For any* balanced line set, skewing one debit line beyond the
    /// tolerance makes validation fail with `Unbalanced`.
    #[test]
    fn prop_skewed_entries_rejected(
        lines in balanced_lines_strategy(),
        skew in 1i64..1_000_000,
    ) {
        let mut lines = lines;
        // First line is always a debit by construction.
        lines[0].amount += Decimal::new(skew, 2);
        let input = make_input(lines);

        let result = validate_replacement(&input, |_| true);
        let matched = matches!(result, Err(JournalError::Unbalanced { .. }));
        prop_assert!(matched);
    }

    /// *For any* balanced entry, posting through the gate succeeds only in
    /// the matching phase, and the same input is rejected in the other
    /// phase without being prepared.
    #[test]
    fn prop_post_respects_gate(
        lines in balanced_lines_strategy(),
        kind in kind_strategy(),
    ) {
        let input = make_input(lines);

        let matching = match kind {
            EntryKind::Ordinary => ClosingState::Open,
            EntryKind::Adjusting => ClosingState::Adjusting,
        };
        let opposite = match matching {
            ClosingState::Open => ClosingState::Adjusting,
            ClosingState::Adjusting => ClosingState::Open,
        };

        prop_assert!(validate_post(2024, kind, matching, &input, |_| true).is_ok());
        prop_assert!(validate_post(2024, kind, opposite, &input, |_| true).is_err());
    }

    /// *For any* line set, filtering never keeps a line with an
    /// unresolved account or a non-positive amount.
    #[test]
    fn prop_filtered_lines_are_valid(
        amounts in prop::collection::vec(-1000i64..1000, 2..10),
    ) {
        let lines: Vec<JournalLineInput> = amounts
            .iter()
            .enumerate()
            .map(|(i, &n)| JournalLineInput {
                account_id: if i % 3 == 0 { None } else { Some(AccountId::new()) },
                is_debit: i % 2 == 0,
                amount: Decimal::new(n, 2),
                tax: None,
            })
            .collect();
        let input = make_input(lines);

        match validate_replacement(&input, |_| true) {
            Ok(prepared) => {
                for line in &prepared.lines {
                    prop_assert!(line.amount > Decimal::ZERO);
                }
            }
            Err(
                JournalError::EmptyEntry | JournalError::Unbalanced { .. },
            ) => {}
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }
}
