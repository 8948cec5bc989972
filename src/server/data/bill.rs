use rust_decimal::Decimal;
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::bill::{Bill, BillFilter, CreateBillParams};

/// Repository for the `bill` table.
///
/// Generic over the connection so the same queries run on the pooled connection and
/// inside a transaction.
pub struct BillRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BillRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new pending bill with no payment date and returns it with its assigned ID
    pub async fn create(&self, params: CreateBillParams) -> Result<Bill, DbErr> {
        let bill = entity::bill::ActiveModel {
            id: ActiveValue::NotSet,
            due_date: ActiveValue::Set(params.due_date),
            payment_date: ActiveValue::Set(None),
            amount: ActiveValue::Set(params.amount),
            description_search: ActiveValue::Set(params.description.to_lowercase()),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(entity::sea_orm_active_enums::BillStatus::Pending),
        }
        .insert(self.db)
        .await?;

        Ok(Bill::from_entity(bill))
    }

    /// Gets a bill by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Bill>, DbErr> {
        let bill = entity::prelude::Bill::find_by_id(id).one(self.db).await?;

        Ok(bill.map(Bill::from_entity))
    }

    /// Overwrites every mutable column of an existing bill
    ///
    /// Returns `DbErr::RecordNotUpdated` if no row has the bill's ID.
    pub async fn update(&self, bill: Bill) -> Result<Bill, DbErr> {
        let updated = entity::bill::ActiveModel {
            id: ActiveValue::Unchanged(bill.id),
            due_date: ActiveValue::Set(bill.due_date),
            payment_date: ActiveValue::Set(bill.payment_date),
            amount: ActiveValue::Set(bill.amount),
            description_search: ActiveValue::Set(bill.description.to_lowercase()),
            description: ActiveValue::Set(bill.description),
            status: ActiveValue::Set(bill.status.into()),
        }
        .update(self.db)
        .await?;

        Ok(Bill::from_entity(updated))
    }

    /// Gets one page of bills matching the filter, ordered by ID
    ///
    /// The due date filter is an exact match. The description filter is a literal
    /// substring match against the lowercased description, so it ignores case and
    /// treats `%` and `_` as plain characters.
    ///
    /// # Returns
    /// - `Ok((bills, total))` - Bills on the requested zero-indexed page and the total
    ///   number of matching bills across all pages
    pub async fn find_paginated(
        &self,
        filter: &BillFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Bill>, u64), DbErr> {
        let mut query = entity::prelude::Bill::find();

        if let Some(due_date) = filter.due_date {
            query = query.filter(entity::bill::Column::DueDate.eq(due_date));
        }
        if let Some(description) = &filter.description {
            let pattern = format!("%{}%", escape_like(&description.to_lowercase()));
            query = query.filter(
                entity::bill::Column::DescriptionSearch.like(LikeExpr::new(pattern).escape('\\')),
            );
        }

        let paginator = query
            .order_by_asc(entity::bill::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let bills = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Bill::from_entity)
            .collect();

        Ok((bills, total))
    }

    /// Sums the amount of every bill due within `start..=end`, regardless of status
    ///
    /// Returns `None` when no bill falls in the range.
    pub async fn sum_amount_by_due_date(
        &self,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    ) -> Result<Option<Decimal>, DbErr> {
        let total = entity::prelude::Bill::find()
            .select_only()
            .column_as(entity::bill::Column::Amount.sum(), "total")
            .filter(entity::bill::Column::DueDate.between(start, end))
            .into_tuple::<Option<Decimal>>()
            .one(self.db)
            .await?;

        Ok(total.flatten())
    }
}

/// Escapes `LIKE` wildcards so the text only matches itself under `ESCAPE '\'`.
fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
