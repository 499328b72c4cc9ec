use super::*;

/// Tests the statement count when every id fits in one batch.
///
/// Expected: 1 page + 1 line batch + 1 item batch = 3 statements
#[tokio::test]
async fn loads_page_with_three_statements() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let counter = test.count_queries().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let orders = seed_two_orders(db).await?;
    counter.reset();

    let repo = OrderRepository::new(db);
    let graphs = repo.find_graphs_paged(0, 100, 100).await?;

    assert_eq!(counter.get(), 3);
    assert_eq!(graphs.len(), 2);
    assert_eq!(graphs[0].order.id, orders[0].id);
    let names: Vec<&str> = graphs[0]
        .order_items
        .iter()
        .map(|(_, item)| item.name.as_str())
        .collect();
    assert_eq!(names, vec!["JPA1 BOOK", "JPA2 BOOK"]);
    assert_eq!(graphs[1].order_items.len(), 2);

    Ok(())
}

/// Tests that a small batch size splits the `IN` lists.
///
/// With a batch size of 1: 1 page + 2 line batches + 4 item batches = 7 statements.
///
/// Expected: Same graphs as with one batch
#[tokio::test]
async fn splits_in_lists_by_batch_size() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let counter = test.count_queries().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_two_orders(db).await?;

    let repo = OrderRepository::new(db);
    let batched = repo.find_graphs_paged(0, 100, 100).await?;
    counter.reset();

    let split = repo.find_graphs_paged(0, 100, 1).await?;

    assert_eq!(counter.get(), 7);
    assert_eq!(split.len(), batched.len());
    for (a, b) in split.iter().zip(batched.iter()) {
        assert_eq!(a.order, b.order);
        assert_eq!(a.order_items, b.order_items);
    }

    Ok(())
}

/// Tests that the limit applies to orders, not lines.
///
/// Expected: Limit 1 returns one order with both of its lines
#[tokio::test]
async fn limit_counts_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_two_orders(db).await?;

    let repo = OrderRepository::new(db);
    let graphs = repo.find_graphs_paged(0, 1, 100).await?;

    assert_eq!(graphs.len(), 1);
    assert_eq!(graphs[0].order_items.len(), 2);

    Ok(())
}

/// Expected: A page past the end issues only the page statement
#[tokio::test]
async fn empty_page_skips_batches() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let counter = test.count_queries().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_two_orders(db).await?;
    counter.reset();

    let repo = OrderRepository::new(db);
    let graphs = repo.find_graphs_paged(10, 100, 100).await?;

    assert!(graphs.is_empty());
    assert_eq!(counter.get(), 1);

    Ok(())
}
