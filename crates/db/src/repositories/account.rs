//! Account repository for chart of accounts database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use saldo_core::catalog::{self, CatalogError};

use crate::entities::{accounts, journal_lines, sea_orm_active_enums::AccountType};

/// Error types for account operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// A chart of accounts rule was violated.
    #[error(transparent)]
    Rule(#[from] CatalogError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct CreateAccountInput {
    /// Account code (unique among all accounts).
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account classification.
    pub account_type: saldo_core::catalog::AccountType,
    /// Whether the account is active.
    pub is_active: bool,
}

/// Input for updating an account; a full-field replacement.
#[derive(Debug, Clone)]
pub struct UpdateAccountInput {
    /// New account code.
    pub code: String,
    /// New account name.
    pub name: String,
    /// New account classification.
    pub account_type: saldo_core::catalog::AccountType,
    /// New active flag.
    pub is_active: bool,
}

/// Account repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    db: DatabaseConnection,
}

impl AccountRepository {
    /// Creates a new account repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new account with validation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - code or name is empty
    /// - the code collides with any existing account, active or inactive
    pub async fn create_account(
        &self,
        input: CreateAccountInput,
    ) -> Result<accounts::Model, AccountError> {
        catalog::validate_account_fields(&input.code, &input.name)?;

        let existing = accounts::Entity::find()
            .filter(accounts::Column::Code.eq(&input.code))
            .one(&self.db)
            .await?;

        if existing.is_some() {
            return Err(CatalogError::DuplicateCode(input.code).into());
        }

        let now = chrono::Utc::now().into();
        let account = accounts::ActiveModel {
            id: Set(Uuid::new_v4()),
            code: Set(input.code),
            name: Set(input.name),
            account_type: Set(AccountType::from(input.account_type)),
            is_active: Set(input.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let account = account.insert(&self.db).await?;
        Ok(account)
    }

    /// Lists accounts ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_accounts(
        &self,
        active_only: bool,
    ) -> Result<Vec<accounts::Model>, AccountError> {
        let mut query = accounts::Entity::find().order_by_asc(accounts::Column::Code);

        if active_only {
            query = query.filter(accounts::Column::IsActive.eq(true));
        }

        let accounts = query.all(&self.db).await?;
        Ok(accounts)
    }

    /// Finds an account by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_account_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<accounts::Model>, AccountError> {
        let account = accounts::Entity::find_by_id(id).one(&self.db).await?;
        Ok(account)
    }

    /// Updates an account; header fields are fully replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the account does not exist
    /// - the new code collides with a different account
    pub async fn update_account(
        &self,
        id: Uuid,
        input: UpdateAccountInput,
    ) -> Result<accounts::Model, AccountError> {
        catalog::validate_account_fields(&input.code, &input.name)?;

        let account = accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(CatalogError::NotFound(id.into()))?;

        if input.code != account.code {
            let collision = accounts::Entity::find()
                .filter(accounts::Column::Code.eq(&input.code))
                .filter(accounts::Column::Id.ne(id))
                .one(&self.db)
                .await?;

            if collision.is_some() {
                return Err(CatalogError::DuplicateCode(input.code).into());
            }
        }

        let mut active: accounts::ActiveModel = account.into();
        active.code = Set(input.code);
        active.name = Set(input.name);
        active.account_type = Set(AccountType::from(input.account_type));
        active.is_active = Set(input.is_active);
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Deletes an account.
    ///
    /// Accounts referenced by journal lines cannot be deleted - only
    /// deactivated - to preserve referential integrity of historical
    /// postings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the account does not exist
    /// - any journal line references the account
    pub async fn delete_account(&self, id: Uuid) -> Result<(), AccountError> {
        let account = accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(CatalogError::NotFound(id.into()))?;

        let line_count = journal_lines::Entity::find()
            .filter(journal_lines::Column::AccountId.eq(id))
            .count(&self.db)
            .await?;

        catalog::ensure_deletable(id.into(), line_count)?;

        accounts::Entity::delete_by_id(account.id)
            .exec(&self.db)
            .await?;

        Ok(())
    }
}
