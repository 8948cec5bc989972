use sea_orm::entity::prelude::*;

/// Payment status of a bill, stored as its Portuguese label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum BillStatus {
    #[sea_orm(string_value = "PENDENTE")]
    Pending,
    #[sea_orm(string_value = "PAGA")]
    Paid,
}
