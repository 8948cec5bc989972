//! CSV parsing for bulk bill imports.
//!
//! Files are comma-delimited with a header line followed by rows of
//! `dueDate,amount,description`. Quoted fields are supported, so a quoted
//! description may contain commas.

use csv::{Position, ReaderBuilder, StringRecord};

use crate::server::{
    error::import::ImportError,
    model::bill::CreateBillParams,
    util::parse::{parse_csv_amount, parse_csv_due_date},
};

/// Number of fields every data row must have.
const COLUMN_COUNT: usize = 3;

/// Parses CSV content into bill creation parameters.
///
/// The first line is a header and is skipped without validation. Blank lines and lines
/// holding only whitespace after it are ignored. Parsing stops at the first bad row.
///
/// # Arguments
/// - `content` - Full text of the uploaded file
///
/// # Returns
/// - `Ok(Vec<CreateBillParams>)` - One entry per data row, in file order
/// - `Err(ImportError)` - A row could not be read or had invalid values
pub fn parse_bills_csv(content: &str) -> Result<Vec<CreateBillParams>, ImportError> {
    // The header is always the first physical line, even when it is blank.
    let rows = content.split_once('\n').map_or("", |(_, rest)| rest);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rows.as_bytes());

    let mut bills = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| {
            let line = source.position().map(file_line).unwrap_or_default();
            ImportError::Csv { line, source }
        })?;

        if is_blank(&record) {
            continue;
        }

        let line = record.position().map(file_line).unwrap_or_default();
        bills.push(parse_row(line, &record)?);
    }

    Ok(bills)
}

/// Line number in the uploaded file, counting the header the reader never sees.
fn file_line(position: &Position) -> u64 {
    position.line() + 1
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

fn parse_row(line: u64, record: &StringRecord) -> Result<CreateBillParams, ImportError> {
    if record.len() != COLUMN_COUNT {
        return Err(ImportError::ColumnCount {
            line,
            found: record.len(),
        });
    }

    let due_date = parse_csv_due_date(line, &record[0])?;
    let amount = parse_csv_amount(line, &record[1])?;

    let description = record[2].to_string();
    if description.trim().is_empty() {
        return Err(ImportError::EmptyDescription { line });
    }

    Ok(CreateBillParams {
        due_date,
        amount,
        description,
    })
}
