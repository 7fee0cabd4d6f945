//! `SeaORM` Entity for the closing_status table.
//!
//! One row per fiscal year that has ever entered the adjustment phase; a
//! year with no row is in the ordinary-entry phase by definition.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-year closing status row.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "closing_status")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Fiscal year; unique.
    #[sea_orm(unique)]
    pub year: i32,
    /// Whether the adjustment phase is active.
    pub is_closed: bool,
    /// Timestamp of the last transition.
    pub closed_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
