use thiserror::Error;

/// Failure while reading an uploaded CSV file of bills.
///
/// Line numbers are 1-based and count the header, so they match what a user sees
/// when opening the file in an editor. Any of these aborts the whole import.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The multipart request carried no `file` field, or it could not be read as UTF-8.
    #[error("Failed to read uploaded file: {0}")]
    Upload(String),

    /// The CSV reader rejected a record, e.g. an unterminated quote.
    #[error("Failed to read CSV record at line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// A data row did not have exactly three fields.
    #[error("Incorrect number of columns: {found}")]
    ColumnCount { line: u64, found: usize },

    /// The due date column is not a `yyyy-MM-dd` date.
    #[error("Invalid due date '{value}' at line {line}")]
    InvalidDueDate { line: u64, value: String },

    /// The description column is empty or only whitespace.
    #[error("Empty description at line {line}")]
    EmptyDescription { line: u64 },

    /// The amount column is not a decimal number.
    #[error("Invalid amount '{value}' at line {line}")]
    InvalidAmount { line: u64, value: String },
}
