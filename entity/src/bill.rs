//! Bill entity - a single accounts payable record.
//!
//! `payment_date` is expected to be set exactly when `status` is `Paid`. The
//! table does not enforce this; the service layer does.
//!
//! `description_search` is the lowercased description, written alongside it so
//! description filters ignore case for non-ASCII text too.
use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::BillStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bill")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub due_date: Date,
    pub payment_date: Option<Date>,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub amount: Decimal,
    pub description: String,
    pub description_search: String,
    pub status: BillStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
