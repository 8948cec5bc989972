use super::*;

#[tokio::test]
async fn overwrites_bill_and_stamps_payment() {
    let (server, db) = setup().await;
    let created = factory::bill::create_bill(&db).await.unwrap();

    let response = server
        .put(&format!("/contas/atualizar/{}", created.id))
        .json(&json!({
            "dataVencimento": "2024-07-15",
            "valor": 250.00,
            "descricao": "Rent",
            "situacao": "PAGA"
        }))
        .await;

    response.assert_status_ok();
    let bill: BillDto = response.json();
    assert_eq!(bill.id, created.id);
    assert_eq!(bill.description, "Rent");
    assert_eq!(bill.status, BillStatusDto::Paid);
    assert_eq!(bill.payment_date, Some(chrono::Local::now().date_naive()));
}

#[tokio::test]
async fn requires_status() {
    let (server, db) = setup().await;
    let created = factory::bill::create_bill(&db).await.unwrap();

    let response = server
        .put(&format!("/contas/atualizar/{}", created.id))
        .json(&json!({
            "dataVencimento": "2024-07-15",
            "valor": 250.00,
            "descricao": "Rent"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let errors = response.json::<ErrorDto>().errors.unwrap();
    assert_eq!(errors["situacao"], "Status must not be null");
}

#[tokio::test]
async fn returns_404_for_unknown_id() {
    let (server, _db) = setup().await;

    let response = server
        .put("/contas/atualizar/99999")
        .json(&json!({
            "dataVencimento": "2024-07-15",
            "valor": 250.00,
            "descricao": "Rent",
            "situacao": "PENDENTE"
        }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
