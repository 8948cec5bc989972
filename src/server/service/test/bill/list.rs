use super::*;

/// Tests listing bills with pagination metadata.
///
/// Expected: Ok(PaginatedBills) with 2 of 3 bills and 2 total pages
#[tokio::test]
async fn returns_page_with_metadata() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::bill::create_bill(db).await?;
    }

    let page = BillService::new(db)
        .list(BillFilter::default(), 0, 2)
        .await?;

    assert_eq!(page.bills.len(), 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.page, 0);
    assert_eq!(page.per_page, 2);
    assert_eq!(page.total_pages, 2);

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_with_not_found_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BillService::new(db).list(BillFilter::default(), 0, 10).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests requesting a page past the last one.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_with_not_found_past_last_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::bill::create_bill(db).await?;

    let result = BillService::new(db).list(BillFilter::default(), 5, 10).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a zero page size.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_zero_page_size() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::bill::create_bill(db).await?;

    let result = BillService::new(db).list(BillFilter::default(), 0, 0).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the description filter through the service.
///
/// Expected: only the matching bill
#[tokio::test]
async fn filters_by_description() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let energy = factory::bill::BillFactory::new(db)
        .description("Energy Bill")
        .build()
        .await?;
    factory::bill::BillFactory::new(db)
        .description("Rent")
        .build()
        .await?;

    let filter = BillFilter {
        due_date: None,
        description: Some("ENERGY".to_string()),
    };
    let page = BillService::new(db).list(filter, 0, 10).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.bills[0].id, energy.id);

    Ok(())
}

/// Tests a page whose offset overflows.
///
/// Verifies that page and size combinations past the store's offset range are
/// rejected before any query runs.
///
/// Expected: Err(AppError::BadRequest) for each combination
#[tokio::test]
async fn rejects_out_of_range_page() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::bill::create_bill(db).await?;

    let service = BillService::new(db);
    for (page, size) in [(u64::MAX / 2, 10), (u64::MAX, 1), (0, u64::MAX), (1 << 62, 2)] {
        let result = service.list(BillFilter::default(), page, size).await;

        assert!(
            matches!(result, Err(AppError::BadRequest(_))),
            "page {page} size {size}"
        );
    }

    Ok(())
}
