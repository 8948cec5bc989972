use super::*;

/// Tests overwriting a bill and paying it in one update.
///
/// Verifies that the description is applied along with the other fields.
///
/// Expected: Ok(Bill) with new values, status Paid and today's payment date
#[tokio::test]
async fn overwrites_fields_and_applies_payment_rule() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::bill::create_bill(db).await?;

    let bill = BillService::new(db)
        .update(UpdateBillParams {
            id: created.id,
            due_date: date(2024, 7, 15),
            amount: dec!(250.00),
            description: "Rent".to_string(),
            status: BillStatus::Paid,
        })
        .await?;

    assert_eq!(bill.id, created.id);
    assert_eq!(bill.due_date, date(2024, 7, 15));
    assert_eq!(bill.amount, dec!(250.00));
    assert_eq!(bill.description, "Rent");
    assert_eq!(bill.status, BillStatus::Paid);
    assert_eq!(bill.payment_date, Some(today()));

    Ok(())
}

/// Tests updating a paid bill back to pending.
///
/// Expected: Ok(Bill) with no payment date
#[tokio::test]
async fn pending_update_clears_payment_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::bill::BillFactory::new(db)
        .paid_on(date(2024, 1, 10))
        .build()
        .await?;

    let bill = BillService::new(db)
        .update(UpdateBillParams {
            id: created.id,
            due_date: created.due_date,
            amount: created.amount,
            description: created.description.clone(),
            status: BillStatus::Pending,
        })
        .await?;

    assert_eq!(bill.status, BillStatus::Pending);
    assert!(bill.payment_date.is_none());

    Ok(())
}

/// Tests updating an unknown bill.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_with_not_found_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bill_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BillService::new(db)
        .update(UpdateBillParams {
            id: 99999,
            due_date: date(2024, 7, 15),
            amount: dec!(1.00),
            description: "Rent".to_string(),
            status: BillStatus::Pending,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
