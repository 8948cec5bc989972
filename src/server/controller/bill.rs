use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        bill::{
            BillDto, BillStatusDto, CreateBillDto, CsvUploadDto, PaginatedBillsDto,
            PeriodTotalDto, UpdateBillDto,
        },
    },
    server::{
        error::{import::ImportError, AppError},
        model::bill::{BillFilter, CreateBillParams, UpdateBillParams},
        service::bill::{BillRegistry, BillService},
        state::AppState,
        util::{
            extract::{AppPath, AppQuery, ValidatedJson},
            parse::empty_string_as_none,
        },
    },
};

/// Tag for grouping bill endpoints in OpenAPI documentation
pub static BILL_TAG: &str = "contas";

/// Body returned by the import endpoint when the file held no data rows.
pub const NOTHING_IMPORTED: &str = "No bills were imported.";

/// Name of the multipart field carrying the CSV file.
const UPLOAD_FIELD: &str = "file";

#[derive(Deserialize)]
pub struct ListBillsParams {
    #[serde(rename = "dataVencimento", default, deserialize_with = "empty_string_as_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "descricao", default, deserialize_with = "empty_string_as_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 {
    10
}

#[derive(Deserialize)]
pub struct StatusParams {
    pub situacao: BillStatusDto,
}

#[derive(Deserialize)]
pub struct PeriodParams {
    #[serde(rename = "dataInicial")]
    pub start: NaiveDate,
    #[serde(rename = "dataFinal")]
    pub end: NaiveDate,
}

/// Create a new bill.
///
/// The bill always starts out pending with no payment date; any status in the
/// payload is ignored.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Due date, amount and description of the bill
///
/// # Returns
/// - `201 Created` - The stored bill with its assigned ID
/// - `400 Bad Request` - Missing or invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/contas/cadastrar",
    tag = BILL_TAG,
    request_body = CreateBillDto,
    responses(
        (status = 201, description = "Successfully created bill", body = BillDto),
        (status = 400, description = "Invalid bill data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bill(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBillDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BillService::new(&state.db);

    let params = CreateBillParams::from_dto(payload)?;
    let bill = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(bill.into_dto(&state.app_url))))
}

/// Replace the fields of an existing bill.
///
/// Due date, amount, description and status are overwritten. Paying the bill stamps
/// today's date as payment date; setting it pending clears the payment date.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - ID of the bill to update
/// - `payload` - New field values
///
/// # Returns
/// - `200 OK` - The updated bill
/// - `400 Bad Request` - Missing or invalid fields
/// - `404 Not Found` - No bill with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/contas/atualizar/{id}",
    tag = BILL_TAG,
    params(
        ("id" = i64, Path, description = "Bill ID")
    ),
    request_body = UpdateBillDto,
    responses(
        (status = 200, description = "Successfully updated bill", body = BillDto),
        (status = 400, description = "Invalid bill data", body = ErrorDto),
        (status = 404, description = "Bill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_bill(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateBillDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BillService::new(&state.db);

    let params = UpdateBillParams::from_dto(id, payload)?;
    let bill = service.update(params).await?;

    Ok(Json(bill.into_dto(&state.app_url)))
}

/// Change the status of a bill.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - ID of the bill
/// - `params` - New status (`PENDENTE` or `PAGA`)
///
/// # Returns
/// - `200 OK` - The bill with its new status and payment date
/// - `400 Bad Request` - Missing or unknown status
/// - `404 Not Found` - No bill with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/contas/alterar-situacao/{id}",
    tag = BILL_TAG,
    params(
        ("id" = i64, Path, description = "Bill ID"),
        ("situacao" = BillStatusDto, Query, description = "New status")
    ),
    responses(
        (status = 200, description = "Successfully changed bill status", body = BillDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Bill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_bill_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppQuery(params): AppQuery<StatusParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BillService::new(&state.db);

    let bill = service.change_status(id, params.situacao.into()).await?;

    Ok(Json(bill.into_dto(&state.app_url)))
}

/// Get a paginated list of bills.
///
/// Both filters are optional and combine with AND. The description filter matches
/// any bill whose description contains the text, ignoring case.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Filters and pagination parameters
///
/// # Returns
/// - `200 OK` - One page of bills
/// - `400 Bad Request` - Invalid date or page size
/// - `404 Not Found` - The requested page holds no bills
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/contas/lista",
    tag = BILL_TAG,
    params(
        ("dataVencimento" = Option<NaiveDate>, Query, description = "Exact due date (yyyy-MM-dd)"),
        ("descricao" = Option<String>, Query, description = "Text the description contains"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("size" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bills", body = PaginatedBillsDto),
        (status = 400, description = "Invalid query parameters", body = ErrorDto),
        (status = 404, description = "No bills found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bills(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListBillsParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BillService::new(&state.db);

    let filter = BillFilter {
        due_date: params.due_date,
        description: params.description,
    };
    let bills = service.list(filter, params.page, params.size).await?;

    Ok(Json(bills.into_dto(&state.app_url)))
}

/// Get a bill by ID.
///
/// # Returns
/// - `200 OK` - The bill
/// - `400 Bad Request` - ID is not a number
/// - `404 Not Found` - No bill with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/contas/{id}",
    tag = BILL_TAG,
    params(
        ("id" = i64, Path, description = "Bill ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bill", body = BillDto),
        (status = 400, description = "Invalid bill ID", body = ErrorDto),
        (status = 404, description = "Bill not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bill_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let service = BillService::new(&state.db);

    let bill = service.get_by_id(id).await?;

    Ok(Json(bill.into_dto(&state.app_url)))
}

/// Get the total amount of bills due within a period.
///
/// Both bounds are inclusive and bills are counted regardless of status. A period
/// without bills totals `R$ 0.00`.
///
/// # Returns
/// - `200 OK` - Formatted total and a description of the period
/// - `400 Bad Request` - Missing or invalid dates
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/contas/valor-total-pago",
    tag = BILL_TAG,
    params(
        ("dataInicial" = NaiveDate, Query, description = "First due date of the period (yyyy-MM-dd)"),
        ("dataFinal" = NaiveDate, Query, description = "Last due date of the period (yyyy-MM-dd)")
    ),
    responses(
        (status = 200, description = "Successfully computed period total", body = PeriodTotalDto),
        (status = 400, description = "Invalid dates", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_period_total(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PeriodParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = BillService::new(&state.db);

    let total = service.sum_by_period(params.start, params.end).await?;

    Ok(Json(PeriodTotalDto {
        status: StatusCode::OK.as_u16(),
        total: format!("R$ {:.2}", total.unwrap_or(Decimal::ZERO)),
        description: format!("Between {} and {}", params.start, params.end),
    }))
}

/// Import bills from an uploaded CSV file.
///
/// The file's first line is a header. Every following non-blank line must hold
/// `dueDate,amount,description`. Either every row is imported or none is.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `multipart` - Multipart form with the file in the `file` field
///
/// # Returns
/// - `200 OK` - JSON list of the created bills, or a plain text notice when the file
///   held no data rows
/// - `400 Bad Request` - Missing file or invalid CSV content
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/contas/importar-csv",
    tag = BILL_TAG,
    request_body(content = CsvUploadDto, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Successfully imported bills", body = Vec<BillDto>),
        (status = 400, description = "Invalid CSV file", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_bills_csv(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    let upload = read_upload(multipart?).await?;
    let content = String::from_utf8(upload.file)
        .map_err(|_| ImportError::Upload("file is not valid UTF-8 text".to_string()))?;

    let service = BillService::new(&state.db);
    let bills = service.import_csv(&content).await?;

    if bills.is_empty() {
        return Ok((StatusCode::OK, NOTHING_IMPORTED).into_response());
    }

    let bills: Vec<BillDto> = bills
        .into_iter()
        .map(|bill| bill.into_dto(&state.app_url))
        .collect();

    Ok(Json(bills).into_response())
}

/// Reads the uploaded file out of the multipart form.
async fn read_upload(mut multipart: Multipart) -> Result<CsvUploadDto, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let bytes = field.bytes().await?;

        return Ok(CsvUploadDto {
            file: bytes.to_vec(),
        });
    }

    Err(ImportError::Upload(format!("missing multipart field '{}'", UPLOAD_FIELD)).into())
}
