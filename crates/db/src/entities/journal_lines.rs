//! `SeaORM` Entity for the journal_lines table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One side of a posting, exclusively owned by its journal entry.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "journal_lines")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// The owning journal entry.
    pub entry_id: Uuid,
    /// The account this line posts to.
    pub account_id: Uuid,
    /// Whether this line is a debit.
    pub is_debit: bool,
    /// Line amount; non-negative, 2 fractional digits.
    pub amount: Decimal,
    /// Optional passthrough tax amount; never part of balance arithmetic.
    pub tax: Option<Decimal>,
    /// Posting order within the entry.
    pub position: i32,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The owning entry.
    #[sea_orm(
        belongs_to = "super::journal_entries::Entity",
        from = "Column::EntryId",
        to = "super::journal_entries::Column::Id"
    )]
    JournalEntries,
    /// The posted account.
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id"
    )]
    Accounts,
}

impl Related<super::journal_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JournalEntries.def()
    }
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for saldo_core::journal::JournalLine {
    fn from(model: Model) -> Self {
        Self {
            id: model.id.into(),
            account_id: model.account_id.into(),
            is_debit: model.is_debit,
            amount: model.amount,
            tax: model.tax,
        }
    }
}
