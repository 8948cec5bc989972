use super::*;
use crate::server::error::import::ImportError;

/// Tests importing a single row.
///
/// Expected: Ok(vec![Bill]) with the row's fields and status Pending
#[tokio::test]
async fn imports_single_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bills = BillService::new(db)
        .import_csv("dataVencimento,valor,descricao\n2024-06-01,99.90,Water\n")
        .await?;

    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].due_date, date(2024, 6, 1));
    assert_eq!(bills[0].amount, dec!(99.90));
    assert_eq!(bills[0].description, "Water");
    assert_eq!(bills[0].status, BillStatus::Pending);
    assert!(bills[0].payment_date.is_none());

    Ok(())
}

/// Tests that imported bills keep file order and are persisted.
///
/// Expected: Ok(bills) in input order, all listed afterwards
#[tokio::test]
async fn imports_rows_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BillService::new(db);
    let bills = service
        .import_csv("header\n2024-06-01,99.90,Water\n2024-06-05,120.00,Energy Bill\n")
        .await?;

    let descriptions: Vec<&str> = bills.iter().map(|b| b.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Water", "Energy Bill"]);

    let page = service.list(BillFilter::default(), 0, 10).await?;
    assert_eq!(page.total, 2);

    Ok(())
}

/// Tests that a bad row aborts the whole import.
///
/// Verifies that the valid row before the bad one is not persisted.
///
/// Expected: Err(AppError::Import(ColumnCount)) and an empty table
#[tokio::test]
async fn wrong_column_count_persists_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BillService::new(db);
    let result = service
        .import_csv("header\n2024-06-01,99.90,Water\n2024-06-02,10.00\n")
        .await;

    assert!(matches!(
        result,
        Err(AppError::Import(ImportError::ColumnCount { found: 2, .. }))
    ));

    let listed = service.list(BillFilter::default(), 0, 10).await;
    assert!(matches!(listed, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests importing a file without data rows.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn header_only_imports_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bills = BillService::new(db)
        .import_csv("dataVencimento,valor,descricao\n")
        .await?;

    assert!(bills.is_empty());

    Ok(())
}

/// Tests a file whose first line is blank.
///
/// Verifies that the blank first line is consumed as the header and the row after it
/// is imported.
///
/// Expected: Ok(vec![Bill]) with the single data row
#[tokio::test]
async fn blank_first_line_counts_as_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bills = BillService::new(db)
        .import_csv("\n2024-06-01,99.90,Water\n")
        .await?;

    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].description, "Water");

    Ok(())
}
