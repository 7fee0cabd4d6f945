//! Closing status repository: per-year adjustment lifecycle storage.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use tracing::info;
use uuid::Uuid;

use saldo_core::closing::{self, BeginAdjustmentOutcome, ClosingState};

use crate::entities::closing_status;

/// Error types for closing lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum ClosingError {
    /// A lifecycle rule was violated.
    #[error(transparent)]
    Rule(#[from] closing::ClosingError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Closing status repository.
#[derive(Debug, Clone)]
pub struct ClosingRepository {
    db: DatabaseConnection,
}

impl ClosingRepository {
    /// Creates a new closing repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the posting phase of a year.
    ///
    /// A year with no stored record is in the ordinary-entry phase.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn state(&self, year: i32) -> Result<ClosingState, DbErr> {
        let record = self.find_record(year).await?;
        Ok(record
            .map(|r| ClosingState::from_is_closed(r.is_closed))
            .unwrap_or_default())
    }

    /// Moves a year into the adjustment phase.
    ///
    /// Creates the closing record on first transition; toggles it
    /// thereafter. Beginning adjustment on an already-adjusting year is a
    /// no-op reported as [`BeginAdjustmentOutcome::AlreadyAdjusting`].
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn begin_adjustment(
        &self,
        year: i32,
    ) -> Result<BeginAdjustmentOutcome, ClosingError> {
        let record = self.find_record(year).await?;
        let current = record
            .as_ref()
            .map(|r| ClosingState::from_is_closed(r.is_closed));

        let outcome = closing::begin_adjustment(current);
        if outcome == BeginAdjustmentOutcome::AlreadyAdjusting {
            return Ok(outcome);
        }

        let now = chrono::Utc::now().into();
        match record {
            Some(existing) => {
                let mut active: closing_status::ActiveModel = existing.into();
                active.is_closed = Set(true);
                active.closed_at = Set(now);
                active.update(&self.db).await?;
            }
            None => {
                let active = closing_status::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    year: Set(year),
                    is_closed: Set(true),
                    closed_at: Set(now),
                };
                active.insert(&self.db).await?;
            }
        }

        info!(year, "Year entered adjustment phase");
        Ok(outcome)
    }

    /// Moves a year back to the ordinary-entry phase.
    ///
    /// # Errors
    ///
    /// Returns `NoClosingRecord` when the year has never entered the
    /// adjustment phase.
    pub async fn reopen(&self, year: i32) -> Result<ClosingState, ClosingError> {
        let record = self.find_record(year).await?;
        let current = record
            .as_ref()
            .map(|r| ClosingState::from_is_closed(r.is_closed));

        let next = closing::reopen(year, current)?;

        if let Some(existing) = record {
            let mut active: closing_status::ActiveModel = existing.into();
            active.is_closed = Set(false);
            active.closed_at = Set(chrono::Utc::now().into());
            active.update(&self.db).await?;
        }

        info!(year, "Year reopened to ordinary-entry phase");
        Ok(next)
    }

    async fn find_record(&self, year: i32) -> Result<Option<closing_status::Model>, DbErr> {
        let record = closing_status::Entity::find()
            .filter(closing_status::Column::Year.eq(year))
            .one(&self.db)
            .await?;
        Ok(record)
    }
}
