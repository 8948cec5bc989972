//! Bill factory for creating test bill entities.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::BillStatus;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::{factory::helpers::next_id, fixture};

/// Factory for creating test bills with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::bill::BillFactory;
///
/// let bill = BillFactory::new(&db)
///     .description("Energy Bill")
///     .due_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
///     .build()
///     .await?;
/// ```
pub struct BillFactory<'a> {
    db: &'a DatabaseConnection,
    due_date: NaiveDate,
    payment_date: Option<NaiveDate>,
    amount: Decimal,
    description: String,
    status: BillStatus,
}

impl<'a> BillFactory<'a> {
    /// Creates a new BillFactory with default values.
    ///
    /// Defaults:
    /// - due_date: [`fixture::bill::default_due_date`]
    /// - payment_date: `None`
    /// - amount: [`fixture::bill::default_amount`]
    /// - description: `"Bill {id}"` where id is auto-incremented
    /// - status: `Pending`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            due_date: fixture::bill::default_due_date(),
            payment_date: None,
            amount: fixture::bill::default_amount(),
            description: format!("Bill {}", id),
            status: BillStatus::Pending,
        }
    }

    /// Sets the due date.
    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = due_date;
        self
    }

    /// Sets the amount.
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Marks the bill as paid on `payment_date`.
    ///
    /// Sets both the status and the payment date so the row stays consistent.
    pub fn paid_on(mut self, payment_date: NaiveDate) -> Self {
        self.status = BillStatus::Paid;
        self.payment_date = Some(payment_date);
        self
    }

    /// Builds and inserts the bill entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::bill::Model)` - Created bill entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::bill::Model, DbErr> {
        entity::bill::ActiveModel {
            id: ActiveValue::NotSet,
            due_date: ActiveValue::Set(self.due_date),
            payment_date: ActiveValue::Set(self.payment_date),
            amount: ActiveValue::Set(self.amount),
            description_search: ActiveValue::Set(self.description.to_lowercase()),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending bill with default values.
///
/// Shorthand for `BillFactory::new(db).build().await`.
pub async fn create_bill(db: &DatabaseConnection) -> Result<entity::bill::Model, DbErr> {
    BillFactory::new(db).build().await
}
