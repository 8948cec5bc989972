//! Bill domain models and parameters.
//!
//! Provides the `Bill` domain model together with the parameter types consumed by the
//! registry operations. Conversion to and from SeaORM entities happens at the
//! repository boundary; conversion to wire DTOs happens in the controller.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    model::{
        api::{LinkDto, LinksDto},
        bill::{BillDto, BillStatusDto, CreateBillDto, PaginatedBillsDto, UpdateBillDto},
    },
    server::error::AppError,
};

/// Payment status of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillStatus {
    Pending,
    Paid,
}

impl From<entity::sea_orm_active_enums::BillStatus> for BillStatus {
    fn from(status: entity::sea_orm_active_enums::BillStatus) -> Self {
        match status {
            entity::sea_orm_active_enums::BillStatus::Pending => Self::Pending,
            entity::sea_orm_active_enums::BillStatus::Paid => Self::Paid,
        }
    }
}

impl From<BillStatus> for entity::sea_orm_active_enums::BillStatus {
    fn from(status: BillStatus) -> Self {
        match status {
            BillStatus::Pending => Self::Pending,
            BillStatus::Paid => Self::Paid,
        }
    }
}

impl From<BillStatusDto> for BillStatus {
    fn from(status: BillStatusDto) -> Self {
        match status {
            BillStatusDto::Pending => Self::Pending,
            BillStatusDto::Paid => Self::Paid,
        }
    }
}

impl From<BillStatus> for BillStatusDto {
    fn from(status: BillStatus) -> Self {
        match status {
            BillStatus::Pending => Self::Pending,
            BillStatus::Paid => Self::Paid,
        }
    }
}

/// A single accounts payable record.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    /// Identifier assigned by the store on creation.
    pub id: i64,
    pub due_date: NaiveDate,
    /// Set exactly when `status` is `Paid`.
    pub payment_date: Option<NaiveDate>,
    pub amount: Decimal,
    pub description: String,
    pub status: BillStatus,
}

impl Bill {
    /// Converts an entity model to a bill domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Bill` - The converted bill domain model
    pub fn from_entity(entity: entity::bill::Model) -> Self {
        Self {
            id: entity.id,
            due_date: entity.due_date,
            payment_date: entity.payment_date,
            amount: entity.amount,
            description: entity.description,
            status: entity.status.into(),
        }
    }

    /// Sets the status and keeps the payment date consistent with it.
    ///
    /// Paying a bill stamps `today` as its payment date; any other status clears it.
    /// The date is stamped again even if the bill was already paid.
    pub fn set_status(&mut self, status: BillStatus, today: NaiveDate) {
        self.status = status;
        self.payment_date = match status {
            BillStatus::Paid => Some(today),
            BillStatus::Pending => None,
        };
    }

    /// Converts the domain model to a DTO for API responses.
    ///
    /// # Arguments
    /// - `app_url` - Public base URL used to build the self link
    ///
    /// # Returns
    /// - `BillDto` - DTO with all bill fields and a `_links.self` entry
    pub fn into_dto(self, app_url: &str) -> BillDto {
        BillDto {
            links: LinksDto {
                self_link: LinkDto {
                    href: bill_href(app_url, self.id),
                },
            },
            id: self.id,
            due_date: self.due_date,
            payment_date: self.payment_date,
            amount: self.amount,
            description: self.description,
            status: self.status.into(),
        }
    }
}

/// Absolute URL of a bill resource.
pub fn bill_href(app_url: &str, id: i64) -> String {
    format!("{}/contas/{}", app_url.trim_end_matches('/'), id)
}

/// Parameters for creating a new bill.
///
/// The status is not a parameter: new bills always start out pending.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBillParams {
    pub due_date: NaiveDate,
    pub amount: Decimal,
    pub description: String,
}

impl CreateBillParams {
    /// Converts a validated request DTO into creation parameters.
    ///
    /// # Returns
    /// - `Ok(CreateBillParams)` - All required fields were present
    /// - `Err(AppError::Validation)` - A required field was missing
    pub fn from_dto(dto: CreateBillDto) -> Result<Self, AppError> {
        Ok(Self {
            due_date: required(dto.due_date, "dataVencimento")?,
            amount: required(dto.amount, "valor")?,
            description: required(dto.description, "descricao")?,
        })
    }
}

/// Parameters for overwriting an existing bill.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBillParams {
    /// ID of the bill to update.
    pub id: i64,
    pub due_date: NaiveDate,
    pub amount: Decimal,
    pub description: String,
    pub status: BillStatus,
}

impl UpdateBillParams {
    /// Converts a validated request DTO into update parameters for bill `id`.
    pub fn from_dto(id: i64, dto: UpdateBillDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            due_date: required(dto.due_date, "dataVencimento")?,
            amount: required(dto.amount, "valor")?,
            description: required(dto.description, "descricao")?,
            status: required(dto.status, "situacao")?.into(),
        })
    }
}

/// Unwraps a field that validation has already checked, reporting it if absent.
fn required<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| {
        AppError::Validation(
            [(field.to_string(), "must not be null".to_string())]
                .into_iter()
                .collect(),
        )
    })
}

/// Optional filters for listing bills.
///
/// With both set a bill must match both; with neither set every bill matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillFilter {
    /// Exact due date.
    pub due_date: Option<NaiveDate>,
    /// Case-insensitive substring of the description.
    pub description: Option<String>,
}

/// One page of bills with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedBills {
    pub bills: Vec<Bill>,
    /// Total number of bills matching the filter across all pages.
    pub total: u64,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedBills {
    /// Converts the page to a DTO for API responses.
    pub fn into_dto(self, app_url: &str) -> PaginatedBillsDto {
        let number_of_elements = self.bills.len() as u64;

        PaginatedBillsDto {
            content: self
                .bills
                .into_iter()
                .map(|bill| bill.into_dto(app_url))
                .collect(),
            number: self.page,
            size: self.per_page,
            total_elements: self.total,
            total_pages: self.total_pages,
            number_of_elements,
            first: self.page == 0,
            last: self.page + 1 >= self.total_pages,
            empty: number_of_elements == 0,
        }
    }
}
