use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::bill::BillRepository,
    error::AppError,
    model::bill::{Bill, BillFilter, BillStatus, CreateBillParams, PaginatedBills, UpdateBillParams},
    service::import::parse_bills_csv,
};

/// Operations on the accounts payable registry.
#[async_trait]
pub trait BillRegistry {
    /// Creates a pending bill and returns it with its assigned ID.
    async fn create(&self, params: CreateBillParams) -> Result<Bill, AppError>;

    /// Gets a bill by ID, failing with `AppError::NotFound` if it does not exist.
    async fn get_by_id(&self, id: i64) -> Result<Bill, AppError>;

    /// Gets one zero-indexed page of bills matching `filter`, ordered by ID.
    ///
    /// Fails with `AppError::BadRequest` if `per_page` is zero or the page offset does
    /// not fit in a signed 64-bit integer, and with `AppError::NotFound` if the page
    /// holds no bills.
    async fn list(
        &self,
        filter: BillFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedBills, AppError>;

    /// Sets a bill's status, stamping today's date as payment date when paid.
    async fn change_status(&self, id: i64, status: BillStatus) -> Result<Bill, AppError>;

    /// Overwrites a bill's due date, amount, description and status.
    async fn update(&self, params: UpdateBillParams) -> Result<Bill, AppError>;

    /// Sums the amount of every bill due within `start..=end`.
    async fn sum_by_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<Decimal>, AppError>;

    /// Creates one pending bill per CSV row, all or nothing.
    async fn import_csv(&self, content: &str) -> Result<Vec<Bill>, AppError>;
}

pub struct BillService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_existing(&self, id: i64) -> Result<Bill, AppError> {
        BillRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Bill {} not found", id)))
    }
}

/// Current local date used as payment date.
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[async_trait]
impl<'a> BillRegistry for BillService<'a> {
    async fn create(&self, params: CreateBillParams) -> Result<Bill, AppError> {
        tracing::info!("Creating bill due {}", params.due_date);

        let bill = BillRepository::new(self.db).create(params).await?;

        Ok(bill)
    }

    async fn get_by_id(&self, id: i64) -> Result<Bill, AppError> {
        tracing::info!("Fetching bill {}", id);

        self.find_existing(id).await
    }

    async fn list(
        &self,
        filter: BillFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedBills, AppError> {
        tracing::info!(
            "Listing bills (page {}, size {}, due date {:?}, description {:?})",
            page,
            per_page,
            filter.due_date,
            filter.description
        );

        if per_page == 0 {
            return Err(AppError::BadRequest(
                "Page size must not be less than one".to_string(),
            ));
        }

        // The store takes offset and limit as signed 64-bit integers.
        let offset = page.checked_mul(per_page).and_then(|o| i64::try_from(o).ok());
        if offset.is_none() || i64::try_from(per_page).is_err() {
            return Err(AppError::BadRequest(format!(
                "Page {} of size {} is out of range",
                page, per_page
            )));
        }

        let (bills, total) = BillRepository::new(self.db)
            .find_paginated(&filter, page, per_page)
            .await?;

        if bills.is_empty() {
            return Err(AppError::NotFound("No bills found".to_string()));
        }

        let total_pages = total.div_ceil(per_page);

        Ok(PaginatedBills {
            bills,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    async fn change_status(&self, id: i64, status: BillStatus) -> Result<Bill, AppError> {
        tracing::info!("Changing status of bill {} to {:?}", id, status);

        let mut bill = self.find_existing(id).await?;
        bill.set_status(status, today());

        let bill = BillRepository::new(self.db).update(bill).await?;

        Ok(bill)
    }

    async fn update(&self, params: UpdateBillParams) -> Result<Bill, AppError> {
        tracing::info!("Updating bill {}", params.id);

        let mut bill = self.find_existing(params.id).await?;
        bill.due_date = params.due_date;
        bill.amount = params.amount;
        bill.description = params.description;
        bill.set_status(params.status, today());

        let bill = BillRepository::new(self.db).update(bill).await?;

        Ok(bill)
    }

    async fn sum_by_period(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<Decimal>, AppError> {
        tracing::info!("Summing bills due between {} and {}", start, end);

        let total = BillRepository::new(self.db)
            .sum_amount_by_due_date(start, end)
            .await?;

        Ok(total)
    }

    async fn import_csv(&self, content: &str) -> Result<Vec<Bill>, AppError> {
        tracing::info!("Importing bills from CSV");
        tracing::debug!("CSV upload is {} bytes", content.len());

        let rows = parse_bills_csv(content)?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self.db.begin().await?;
        let repo = BillRepository::new(&txn);

        let mut bills = Vec::with_capacity(rows.len());
        for params in rows {
            bills.push(repo.create(params).await?);
        }

        txn.commit().await?;

        tracing::info!("Imported {} bills", bills.len());

        Ok(bills)
    }
}
