//! `SeaORM` entity definitions for the ledger tables.

pub mod accounts;
pub mod closing_status;
pub mod journal_entries;
pub mod journal_lines;
pub mod sea_orm_active_enums;
