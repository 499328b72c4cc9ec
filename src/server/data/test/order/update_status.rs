use super::*;

/// Expected: Ok(true) and the stored status becomes `CANCEL`
#[tokio::test]
async fn stores_new_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, order, _) = factory::helpers::create_order_with_items(db, &[]).await?;

    let repo = OrderRepository::new(db);
    assert!(repo.update_status(order.id, OrderStatus::Cancel).await?);

    let stored = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored.status, "CANCEL");

    Ok(())
}
