//! Ledger store with `SeaORM` entities and repositories.
//!
//! This crate is the storage collaborator of the accounting core:
//! - `SeaORM` entity definitions for the four ledger tables
//! - Repository abstractions implementing the store interface the core
//!   requires (atomic entry+lines writes, per-year queries)
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    AccountRepository, ClosingRepository, JournalRepository, ReportRepository,
};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
