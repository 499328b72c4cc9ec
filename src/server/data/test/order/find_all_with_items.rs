use super::*;

/// Tests that the collection join is folded back into one graph per order.
///
/// The statement returns four rows for two orders.
///
/// Expected: Ok with two graphs of two lines each after 1 statement
#[tokio::test]
async fn folds_duplicated_rows_into_orders() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let counter = test.count_queries().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let orders = seed_two_orders(db).await?;
    counter.reset();

    let repo = OrderRepository::new(db);
    let graphs = repo.find_all_with_items().await?;

    assert_eq!(counter.get(), 1);
    assert_eq!(graphs.len(), 2);
    assert_eq!(graphs[0].order.id, orders[0].id);
    assert_eq!(graphs[0].order_items.len(), 2);
    assert_eq!(graphs[0].order_items[0].1.name, "JPA1 BOOK");
    assert_eq!(graphs[0].order_items[1].0.count, 2);
    assert_eq!(graphs[1].member.name, "userB");
    assert_eq!(graphs[1].order_items[1].1.name, "SPRING2 BOOK");

    Ok(())
}

/// Tests that orders without lines are dropped by the inner join.
///
/// Expected: Only the order with lines is returned
#[tokio::test]
async fn drops_orders_without_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    factory::helpers::create_order_with_items(db, &[]).await?;
    let (_, _, with_lines, _) =
        factory::helpers::create_order_with_items(db, &[(&book, 1)]).await?;

    let repo = OrderRepository::new(db);
    let graphs = repo.find_all_with_items().await?;

    assert_eq!(graphs.len(), 1);
    assert_eq!(graphs[0].order.id, with_lines.id);

    Ok(())
}
