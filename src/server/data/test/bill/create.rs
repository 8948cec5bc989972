use super::*;

/// Tests creating a new bill.
///
/// Verifies that the repository inserts the bill with the provided fields, assigns
/// an ID, and starts it out pending with no payment date.
///
/// Expected: Ok(Bill) with status Pending
#[tokio::test]
async fn creates_pending_bill() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BillRepository::new(db);
    let bill = repo
        .create(CreateBillParams {
            due_date: date(2024, 6, 1),
            amount: dec!(99.90),
            description: "Water".to_string(),
        })
        .await?;

    assert!(bill.id > 0);
    assert_eq!(bill.due_date, date(2024, 6, 1));
    assert_eq!(bill.amount, dec!(99.90));
    assert_eq!(bill.description, "Water");
    assert_eq!(bill.status, BillStatus::Pending);
    assert!(bill.payment_date.is_none());

    Ok(())
}

/// Tests that created bills are persisted.
///
/// Verifies that a created bill can be read back from the table.
///
/// Expected: entity exists with matching description
#[tokio::test]
async fn persists_created_bill() -> Result<(), DbErr> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BillRepository::new(db);
    let bill = repo
        .create(CreateBillParams {
            due_date: date(2024, 6, 1),
            amount: dec!(10.00),
            description: "Internet".to_string(),
        })
        .await?;

    let stored = entity::prelude::Bill::find_by_id(bill.id).one(db).await?;

    assert!(stored.is_some());
    assert_eq!(stored.unwrap().description, "Internet");

    Ok(())
}

/// Tests creating multiple bills.
///
/// Verifies that each created bill receives its own ID.
///
/// Expected: distinct IDs
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BillRepository::new(db);
    let params = CreateBillParams {
        due_date: date(2024, 6, 1),
        amount: dec!(10.00),
        description: "Rent".to_string(),
    };
    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
