use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};

use crate::server::error::import::ImportError;

/// Date format of the due date column in imported CSV files.
const CSV_DATE_FORMAT: &str = "%Y-%m-%d";

/// Deserializes an optional query value, treating an empty string as absent.
///
/// Lets clients send `?dataVencimento=` from a blank form field without the request
/// being rejected as an invalid date.
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s).map_err(de::Error::custom).map(Some),
    }
}

/// Parses the due date column of a CSV row.
///
/// # Arguments
/// - `line` - 1-based line number of the row, for error reporting
/// - `value` - Raw field value; surrounding whitespace is ignored
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed `yyyy-MM-dd` date
/// - `Err(ImportError::InvalidDueDate)` - Value is not a valid date
pub fn parse_csv_due_date(line: u64, value: &str) -> Result<NaiveDate, ImportError> {
    NaiveDate::parse_from_str(value.trim(), CSV_DATE_FORMAT).map_err(|_| {
        ImportError::InvalidDueDate {
            line,
            value: value.to_string(),
        }
    })
}

/// Parses the amount column of a CSV row.
///
/// # Arguments
/// - `line` - 1-based line number of the row, for error reporting
/// - `value` - Raw field value; surrounding whitespace is ignored
///
/// # Returns
/// - `Ok(Decimal)` - Parsed amount such as `99.90`
/// - `Err(ImportError::InvalidAmount)` - Value is not a decimal number
pub fn parse_csv_amount(line: u64, value: &str) -> Result<Decimal, ImportError> {
    Decimal::from_str(value.trim()).map_err(|_| ImportError::InvalidAmount {
        line,
        value: value.to_string(),
    })
}
