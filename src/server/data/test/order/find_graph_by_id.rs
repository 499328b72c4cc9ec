use super::*;

/// Expected: Ok(Some) with the order's single line and its item
#[tokio::test]
async fn loads_complete_graph() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let movie = factory::create_movie(db).await?;
    let (member, delivery, order, lines) =
        factory::helpers::create_order_with_items(db, &[(&movie, 2)]).await?;

    let repo = OrderRepository::new(db);
    let graph = repo.find_graph_by_id(order.id).await?.unwrap();

    assert_eq!(graph.order.id, order.id);
    assert_eq!(graph.member, member);
    assert_eq!(graph.delivery, delivery);
    assert_eq!(graph.order_items, vec![(lines[0].clone(), movie)]);

    Ok(())
}

/// Expected: Ok(None) for an unknown id
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    assert!(repo.find_graph_by_id(404).await?.is_none());

    Ok(())
}
