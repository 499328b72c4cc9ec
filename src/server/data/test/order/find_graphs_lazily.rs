use super::*;

/// Tests that every association is loaded with its own statement.
///
/// Two orders with two lines each: 1 search + 3 per order + 1 per line = 11.
///
/// Expected: Ok with complete graphs after 11 statements
#[tokio::test]
async fn issues_one_statement_per_association() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let counter = test.count_queries().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_two_orders(db).await?;
    counter.reset();

    let repo = OrderRepository::new(db);
    let graphs = repo.find_graphs_lazily(&OrderSearch::default()).await?;

    assert_eq!(counter.get(), 1 + 3 * 2 + 4);
    assert_eq!(graphs.len(), 2);
    assert_eq!(graphs[0].member.name, "userA");
    assert_eq!(graphs[0].delivery.city.as_deref(), Some("Seoul"));
    let names: Vec<&str> = graphs[1]
        .order_items
        .iter()
        .map(|(_, item)| item.name.as_str())
        .collect();
    assert_eq!(names, vec!["SPRING1 BOOK", "SPRING2 BOOK"]);

    Ok(())
}

/// Tests that an order without lines has an empty line list.
///
/// Expected: 1 search + 3 statements for the single order
#[tokio::test]
async fn loads_order_without_lines() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let counter = test.count_queries().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_order_with_items(db, &[]).await?;
    counter.reset();

    let repo = OrderRepository::new(db);
    let graphs = repo.find_graphs_lazily(&OrderSearch::default()).await?;

    assert_eq!(counter.get(), 4);
    assert_eq!(graphs.len(), 1);
    assert!(graphs[0].order_items.is_empty());

    Ok(())
}
