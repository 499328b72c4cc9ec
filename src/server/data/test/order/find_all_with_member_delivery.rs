use super::*;

/// Tests that orders, members and deliveries come back from a single statement.
///
/// Expected: Ok with one row per order after 1 statement
#[tokio::test]
async fn loads_to_one_associations_in_one_statement() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let counter = test.count_queries().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let orders = seed_two_orders(db).await?;
    counter.reset();

    let repo = OrderRepository::new(db);
    let rows = repo.find_all_with_member_delivery(0, None).await?;

    assert_eq!(counter.get(), 1);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].order.id, orders[0].id);
    assert_eq!(rows[0].member.name, "userA");
    assert_eq!(rows[1].member.name, "userB");
    assert_eq!(rows[1].delivery.id, orders[1].delivery_id);
    assert_eq!(rows[1].delivery.zipcode.as_deref(), Some("2222"));

    Ok(())
}

/// Tests that offset and limit page over orders.
///
/// Expected: Offset 1, limit 1 returns only the second order
#[tokio::test]
async fn pages_over_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let orders = seed_two_orders(db).await?;

    let repo = OrderRepository::new(db);
    let rows = repo.find_all_with_member_delivery(1, Some(1)).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].order.id, orders[1].id);

    Ok(())
}
