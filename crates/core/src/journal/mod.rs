//! Journal engine: entry types and the posting validation pipeline.

pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use error::JournalError;
pub use types::{
    EntryKind, EntryTotals, JournalEntry, JournalEntryInput, JournalLine, JournalLineInput,
    PostedLine, PreparedEntry,
};
pub use validation::{balance_tolerance, validate_period_gate, validate_post, validate_replacement};
