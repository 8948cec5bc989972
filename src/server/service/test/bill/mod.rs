use chrono::NaiveDate;
use rust_decimal_macros::dec;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::bill::{BillFilter, BillStatus, CreateBillParams, UpdateBillParams},
    service::bill::{BillRegistry, BillService},
};

mod import_csv;
mod list;
mod update;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
