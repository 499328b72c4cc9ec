use super::*;

/// Tests the per-order line projection.
///
/// Expected: Only the lines of the requested order, with item names
#[tokio::test]
async fn projects_lines_of_one_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::item::ItemFactory::book(db)
        .name("JPA1 BOOK")
        .build()
        .await?;
    let album = factory::item::ItemFactory::album(db)
        .name("Album")
        .build()
        .await?;
    let (_, _, order, _) =
        factory::helpers::create_order_with_items(db, &[(&book, 1), (&album, 3)]).await?;
    factory::helpers::create_order_with_items(db, &[(&book, 5)]).await?;

    let repo = OrderQueryRepository::new(db);
    let rows = repo.find_order_item_rows(order.id).await?;

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.order_id == order.id));
    assert_eq!(rows[0].item_name, "JPA1 BOOK");
    assert_eq!(rows[1].item_name, "Album");
    assert_eq!(rows[1].count, 3);
    assert_eq!(rows[1].order_price, album.price);

    Ok(())
}

/// Tests the `IN` variant across several orders.
///
/// Expected: Lines of both requested orders in 1 statement, the third order excluded
#[tokio::test]
async fn projects_lines_of_many_orders_at_once() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let counter = test.count_queries().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let (_, _, first, _) =
        factory::helpers::create_order_with_items(db, &[(&book, 1), (&book, 2)]).await?;
    let (_, _, second, _) = factory::helpers::create_order_with_items(db, &[(&book, 3)]).await?;
    factory::helpers::create_order_with_items(db, &[(&book, 4)]).await?;
    counter.reset();

    let repo = OrderQueryRepository::new(db);
    let rows = repo.find_order_item_rows_in(&[first.id, second.id]).await?;

    assert_eq!(counter.get(), 1);
    let counts: Vec<(i32, i32)> = rows.iter().map(|row| (row.order_id, row.count)).collect();
    assert_eq!(counts, vec![(first.id, 1), (first.id, 2), (second.id, 3)]);

    Ok(())
}
