//! SeaORM entities for the accounts payable database.

pub mod bill;
pub mod prelude;
pub mod sea_orm_active_enums;
