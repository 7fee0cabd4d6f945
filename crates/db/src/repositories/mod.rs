//! Repository abstractions over the ledger tables.
//!
//! Repositories enforce the core's business rules against the live data
//! set and provide the atomicity the journal engine requires: an entry's
//! header and lines are written or removed inside a single database
//! transaction.

pub mod account;
pub mod closing;
pub mod journal;
pub mod report;

pub use account::AccountRepository;
pub use closing::ClosingRepository;
pub use journal::JournalRepository;
pub use report::ReportRepository;
