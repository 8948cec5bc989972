use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller::bill, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contas a Pagar",
        description = "Accounts payable: register, update, pay, list, total and import bills"
    ),
    tags((name = "contas", description = "Bill endpoints"))
)]
struct ApiDoc;

/// Builds the application router with every bill route and the OpenAPI UI.
///
/// The OpenAPI document is collected from the handlers' `utoipa::path` attributes and
/// served at `/api-docs/openapi.json`, with Swagger UI at `/swagger-ui`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(bill::create_bill))
        .routes(routes!(bill::update_bill))
        .routes(routes!(bill::change_bill_status))
        .routes(routes!(bill::get_bills))
        .routes(routes!(bill::get_bill_by_id))
        .routes(routes!(bill::get_period_total))
        .routes(routes!(bill::import_bills_csv))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
