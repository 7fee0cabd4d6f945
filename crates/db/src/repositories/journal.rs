//! Journal repository: posting, replacing, and deleting entries.
//!
//! The entry header and its lines are always written or removed inside a
//! single database transaction, so concurrent readers observe an entry
//! either entirely present or entirely absent.

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

use saldo_core::journal::{
    self, EntryKind, JournalEntry, JournalEntryInput, PostedLine, PreparedEntry,
};
use saldo_shared::types::AccountId;

use crate::entities::{accounts, journal_entries, journal_lines};
use crate::repositories::closing::ClosingRepository;

/// Error types for journal operations.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    /// A posting rule was violated.
    #[error(transparent)]
    Rule(#[from] journal::JournalError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Journal repository.
#[derive(Debug, Clone)]
pub struct JournalRepository {
    db: DatabaseConnection,
}

impl JournalRepository {
    /// Creates a new journal repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a new journal entry.
    ///
    /// Runs the full validation pipeline (closing gate, required fields,
    /// line filtering, balance) before any write; header and lines are
    /// persisted as one transaction.
    ///
    /// # Errors
    ///
    /// Returns the first failing validation check, or a database error.
    /// Nothing is persisted on failure.
    pub async fn post(
        &self,
        year: i32,
        kind: EntryKind,
        input: JournalEntryInput,
    ) -> Result<JournalEntry, JournalError> {
        let state = ClosingRepository::new(self.db.clone()).state(year).await?;

        let known_accounts = self.account_id_set().await?;
        let prepared = journal::validate_post(year, kind, state, &input, |id| {
            known_accounts.contains(&id)
        })?;

        let entry = self.insert_entry(kind, &input, &prepared).await?;
        info!(
            entry_id = %entry.id,
            year,
            kind = ?kind,
            lines = entry.lines.len(),
            "Journal entry posted"
        );
        Ok(entry)
    }

    /// Replaces an entry's header fields and its entire line set.
    ///
    /// Validation (required fields, line filtering, balance) runs before
    /// any mutation; on failure the stored entry is untouched. The old
    /// lines are discarded, not merged.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, the first failing validation
    /// check, or a database error.
    pub async fn update(
        &self,
        id: Uuid,
        input: JournalEntryInput,
    ) -> Result<JournalEntry, JournalError> {
        let existing = journal_entries::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(journal::JournalError::NotFound(id.into()))?;

        let known_accounts = self.account_id_set().await?;
        let prepared = journal::validate_replacement(&input, |account_id| {
            known_accounts.contains(&account_id)
        })?;

        let txn = self.db.begin().await?;

        let mut header: journal_entries::ActiveModel = existing.into();
        header.date = Set(input.date);
        header.number = Set(input.number.clone());
        header.description = Set(input.description.clone());
        let header = header.update(&txn).await?;

        journal_lines::Entity::delete_many()
            .filter(journal_lines::Column::EntryId.eq(id))
            .exec(&txn)
            .await?;

        let lines = insert_lines(&txn, id, &prepared.lines).await?;

        txn.commit().await?;

        info!(entry_id = %id, "Journal entry replaced");
        Ok(to_domain(header, lines))
    }

    /// Deletes an entry and all its lines atomically.
    ///
    /// Deletion is unconditional: the closing state never gates removal
    /// of historical entries.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or a database error.
    pub async fn delete(&self, id: Uuid) -> Result<(), JournalError> {
        let existing = journal_entries::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(journal::JournalError::NotFound(id.into()))?;

        let txn = self.db.begin().await?;

        journal_lines::Entity::delete_many()
            .filter(journal_lines::Column::EntryId.eq(id))
            .exec(&txn)
            .await?;
        journal_entries::Entity::delete_by_id(existing.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        info!(entry_id = %id, "Journal entry deleted");
        Ok(())
    }

    /// Finds an entry with its lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<JournalEntry>, JournalError> {
        let Some(header) = journal_entries::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let lines = journal_lines::Entity::find()
            .filter(journal_lines::Column::EntryId.eq(header.id))
            .order_by_asc(journal_lines::Column::Position)
            .all(&self.db)
            .await?;

        Ok(Some(to_domain(header, lines)))
    }

    /// Lists the entries of a fiscal year, optionally restricted by
    /// kind, ordered by `(date, number)`, each with its lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_period(
        &self,
        year: i32,
        kind: Option<EntryKind>,
    ) -> Result<Vec<JournalEntry>, JournalError> {
        let (start, end) = year_range(year);

        let mut query = journal_entries::Entity::find()
            .filter(journal_entries::Column::Date.gte(start))
            .filter(journal_entries::Column::Date.lte(end))
            .order_by_asc(journal_entries::Column::Date)
            .order_by_asc(journal_entries::Column::Number);

        if let Some(kind) = kind {
            query = query.filter(journal_entries::Column::IsAdjustment.eq(kind.is_adjustment()));
        }

        let headers = query.all(&self.db).await?;

        let mut entries = Vec::with_capacity(headers.len());
        for header in headers {
            let lines = journal_lines::Entity::find()
                .filter(journal_lines::Column::EntryId.eq(header.id))
                .order_by_asc(journal_lines::Column::Position)
                .all(&self.db)
                .await?;
            entries.push(to_domain(header, lines));
        }

        Ok(entries)
    }

    async fn insert_entry(
        &self,
        kind: EntryKind,
        input: &JournalEntryInput,
        prepared: &PreparedEntry,
    ) -> Result<JournalEntry, JournalError> {
        let txn = self.db.begin().await?;

        let header = journal_entries::ActiveModel {
            id: Set(Uuid::new_v4()),
            date: Set(input.date),
            number: Set(input.number.clone()),
            description: Set(input.description.clone()),
            is_adjustment: Set(kind.is_adjustment()),
            created_by: Set(input.created_by.map(saldo_shared::types::UserId::into_inner)),
            created_at: Set(Utc::now().into()),
        };
        let header = header.insert(&txn).await?;

        let lines = insert_lines(&txn, header.id, &prepared.lines).await?;

        txn.commit().await?;
        Ok(to_domain(header, lines))
    }

    async fn account_id_set(&self) -> Result<HashSet<AccountId>, JournalError> {
        let ids: Vec<Uuid> = accounts::Entity::find()
            .select_only()
            .column(accounts::Column::Id)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(ids.into_iter().map(AccountId::from).collect())
    }
}

/// Inserts the prepared lines under an entry, preserving posting order.
async fn insert_lines(
    txn: &sea_orm::DatabaseTransaction,
    entry_id: Uuid,
    lines: &[PostedLine],
) -> Result<Vec<journal_lines::Model>, JournalError> {
    let mut inserted = Vec::with_capacity(lines.len());
    for (idx, line) in lines.iter().enumerate() {
        let model = journal_lines::ActiveModel {
            id: Set(Uuid::new_v4()),
            entry_id: Set(entry_id),
            account_id: Set(line.account_id.into_inner()),
            is_debit: Set(line.is_debit),
            amount: Set(line.amount),
            tax: Set(line.tax),
            position: Set(i32::try_from(idx).unwrap_or(i32::MAX)),
        };
        inserted.push(model.insert(txn).await?);
    }
    Ok(inserted)
}

/// Maps entity rows to the core read model.
fn to_domain(header: journal_entries::Model, lines: Vec<journal_lines::Model>) -> JournalEntry {
    JournalEntry {
        id: header.id.into(),
        date: header.date,
        number: header.number,
        description: header.description,
        kind: EntryKind::from_is_adjustment(header.is_adjustment),
        created_by: header.created_by.map(Into::into),
        created_at: header.created_at.with_timezone(&Utc),
        lines: lines.into_iter().map(Into::into).collect(),
    }
}

/// Returns the inclusive date range of a fiscal year.
fn year_range(year: i32) -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN),
        NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range() {
        let (start, end) = year_range(2024);
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }
}
