//! Bill fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::{bill, sea_orm_active_enums::BillStatus};
use rust_decimal::Decimal;

/// Default test bill description.
pub const DEFAULT_DESCRIPTION: &str = "Water";

/// Default due date used by fixtures and factories: 2024-06-01.
pub fn default_due_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("2024-06-01 is a valid date")
}

/// Default amount used by fixtures and factories: 99.90.
pub fn default_amount() -> Decimal {
    Decimal::new(9990, 2)
}

/// Creates a pending bill entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - due_date: `2024-06-01`
/// - payment_date: `None`
/// - amount: `99.90`
/// - description: `"Water"`
/// - status: `Pending`
pub fn entity() -> bill::Model {
    bill::Model {
        id: 1,
        due_date: default_due_date(),
        payment_date: None,
        amount: default_amount(),
        description: DEFAULT_DESCRIPTION.to_string(),
        description_search: DEFAULT_DESCRIPTION.to_lowercase(),
        status: BillStatus::Pending,
    }
}
