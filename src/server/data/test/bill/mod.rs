use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::bill::BillRepository,
    model::bill::{Bill, BillFilter, BillStatus, CreateBillParams},
};

mod create;
mod get_by_id;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
