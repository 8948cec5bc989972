use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::api::LinksDto;

/// Bill status as it appears on the wire.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillStatusDto {
    #[serde(rename = "PENDENTE")]
    Pending,
    #[serde(rename = "PAGA")]
    Paid,
}

/// Request body of `POST /contas/cadastrar`.
///
/// Every field is optional at the serde level so that a missing field is
/// reported by validation with a per-field message instead of a parse error.
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone, PartialEq, Default)]
pub struct CreateBillDto {
    #[serde(rename = "dataVencimento")]
    #[validate(required(message = "Due date must not be null"))]
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "valor")]
    #[validate(required(message = "Amount must not be null"))]
    pub amount: Option<Decimal>,
    #[serde(rename = "descricao")]
    #[validate(
        required(message = "Description must not be empty"),
        length(min = 1, message = "Description must not be empty")
    )]
    pub description: Option<String>,
}

/// Request body of `PUT /contas/atualizar/{id}`.
#[derive(Serialize, Deserialize, ToSchema, Validate, Debug, Clone, PartialEq, Default)]
pub struct UpdateBillDto {
    #[serde(rename = "dataVencimento")]
    #[validate(required(message = "Due date must not be null"))]
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "valor")]
    #[validate(required(message = "Amount must not be null"))]
    pub amount: Option<Decimal>,
    #[serde(rename = "descricao")]
    #[validate(
        required(message = "Description must not be empty"),
        length(min = 1, message = "Description must not be empty")
    )]
    pub description: Option<String>,
    #[serde(rename = "situacao")]
    #[validate(required(message = "Status must not be null"))]
    pub status: Option<BillStatusDto>,
}

/// Maps a request DTO field to its JSON name for validation messages.
pub trait WireFieldNames {
    fn wire_name(field: &str) -> &str;
}

fn bill_wire_name(field: &str) -> &str {
    match field {
        "due_date" => "dataVencimento",
        "amount" => "valor",
        "description" => "descricao",
        "status" => "situacao",
        other => other,
    }
}

impl WireFieldNames for CreateBillDto {
    fn wire_name(field: &str) -> &str {
        bill_wire_name(field)
    }
}

impl WireFieldNames for UpdateBillDto {
    fn wire_name(field: &str) -> &str {
        bill_wire_name(field)
    }
}

/// A stored bill with its self link.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BillDto {
    pub id: i64,
    #[serde(rename = "dataVencimento")]
    pub due_date: NaiveDate,
    #[serde(rename = "dataPagamento")]
    pub payment_date: Option<NaiveDate>,
    #[serde(rename = "valor", with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "situacao")]
    pub status: BillStatusDto,
    #[serde(rename = "_links")]
    pub links: LinksDto,
}

/// One page of bills, shaped like the page object clients already consume.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedBillsDto {
    pub content: Vec<BillDto>,
    /// Zero-indexed page number.
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

/// Body of `GET /contas/valor-total-pago`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PeriodTotalDto {
    pub status: u16,
    /// Formatted as `R$ <value>` with two decimal places.
    #[serde(rename = "valorTotal")]
    pub total: String,
    pub description: String,
}

/// Multipart form accepted by `POST /contas/importar-csv`.
#[derive(ToSchema, Debug, Clone, PartialEq)]
pub struct CsvUploadDto {
    /// Comma-delimited file: a header line, then `dueDate,amount,description` rows.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
