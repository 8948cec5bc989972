use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{
        api::ErrorDto,
        bill::{BillDto, BillStatusDto, PaginatedBillsDto, PeriodTotalDto},
    },
    server::{router::router, state::AppState},
};

mod update;

const APP_URL: &str = "http://localhost:8080";

/// Builds a test server over an in-memory database with the bill table.
///
/// Returns the database too so tests can seed it with the factory.
async fn setup() -> (TestServer, DatabaseConnection) {
    let db = TestBuilder::new()
        .with_bill_tables()
        .build()
        .await
        .unwrap()
        .into_database()
        .await
        .unwrap();

    let app = router().with_state(AppState::new(db.clone(), APP_URL.to_string()));
    let server = TestServer::new(app);

    (server, db)
}
