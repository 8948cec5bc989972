use super::*;

/// Tests getting an existing bill by ID.
///
/// Expected: Ok(Some(Bill)) with matching fields
#[tokio::test]
async fn gets_existing_bill() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::bill::BillFactory::new(db)
        .description("Energy Bill")
        .build()
        .await?;

    let repo = BillRepository::new(db);
    let result = repo.get_by_id(created.id).await?;

    assert!(result.is_some());
    let bill = result.unwrap();
    assert_eq!(bill.id, created.id);
    assert_eq!(bill.description, "Energy Bill");
    assert_eq!(bill.status, BillStatus::Pending);

    Ok(())
}

/// Tests getting a paid bill by ID.
///
/// Verifies that the status and payment date survive the entity conversion.
///
/// Expected: Ok(Some(Bill)) with status Paid and payment date set
#[tokio::test]
async fn gets_paid_bill_with_payment_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::bill::BillFactory::new(db)
        .paid_on(date(2024, 1, 10))
        .build()
        .await?;

    let repo = BillRepository::new(db);
    let bill = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(bill.status, BillStatus::Paid);
    assert_eq!(bill.payment_date, Some(date(2024, 1, 10)));

    Ok(())
}

/// Tests getting a nonexistent bill.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_bill() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BillRepository::new(db);
    let result = repo.get_by_id(99999).await?;

    assert!(result.is_none());

    Ok(())
}
