use super::*;

/// Tests that the projection carries member name and delivery address.
///
/// Expected: One row per order, selected with 1 statement
#[tokio::test]
async fn projects_root_columns() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let counter = test.count_queries().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let member = factory::member::MemberFactory::new(db)
        .name("userA")
        .address("Seoul", "1", "1111")
        .build()
        .await?;
    let (order, _, _) =
        factory::helpers::create_order_for_member(db, &member, &[(&book, 1), (&book, 2)]).await?;
    counter.reset();

    let repo = OrderQueryRepository::new(db);
    let rows = repo.find_order_rows().await?;

    assert_eq!(counter.get(), 1);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].order_id, order.id);
    assert_eq!(rows[0].name, "userA");
    assert_eq!(rows[0].order_status, "ORDER");
    assert_eq!(rows[0].city.as_deref(), Some("Seoul"));
    assert_eq!(rows[0].zipcode.as_deref(), Some("1111"));

    Ok(())
}

/// Tests that orders without lines are still listed.
///
/// Expected: Both orders returned
#[tokio::test]
async fn includes_orders_without_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    factory::helpers::create_order_with_items(db, &[]).await?;
    factory::helpers::create_order_with_items(db, &[(&book, 1)]).await?;

    let repo = OrderQueryRepository::new(db);
    assert_eq!(repo.find_order_rows().await?.len(), 2);

    Ok(())
}
