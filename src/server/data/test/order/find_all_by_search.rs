use super::*;

fn ids(orders: &[entity::order::Model]) -> Vec<i32> {
    orders.iter().map(|o| o.id).collect()
}

/// Tests that an empty search returns every order oldest first.
///
/// Expected: Ok with both orders
#[tokio::test]
async fn empty_search_returns_all_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let orders = seed_two_orders(db).await?;

    let repo = OrderRepository::new(db);
    let found = repo.find_all_by_search(&OrderSearch::default()).await?;

    assert_eq!(ids(&found), ids(&orders));

    Ok(())
}

/// Tests filtering by a substring of the member name.
///
/// Expected: Only userB's order matches "rB"
#[tokio::test]
async fn filters_by_member_name_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let orders = seed_two_orders(db).await?;

    let repo = OrderRepository::new(db);
    let found = repo
        .find_all_by_search(&OrderSearch {
            member_name: Some("rB".to_string()),
            order_status: None,
        })
        .await?;

    assert_eq!(ids(&found), vec![orders[1].id]);

    Ok(())
}

/// Tests filtering by status.
///
/// Expected: Only the cancelled order is returned
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_two_orders(db).await?;
    let member = factory::create_member(db).await?;
    let delivery = factory::create_delivery(db).await?;
    let cancelled = factory::order::OrderFactory::new(db, member.id, delivery.id)
        .status("CANCEL")
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let found = repo
        .find_all_by_search(&OrderSearch {
            member_name: None,
            order_status: Some(OrderStatus::Cancel),
        })
        .await?;

    assert_eq!(ids(&found), vec![cancelled.id]);

    Ok(())
}

/// Tests that both filters combine.
///
/// Expected: No order matches userA with status CANCEL
#[tokio::test]
async fn combines_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_two_orders(db).await?;

    let repo = OrderRepository::new(db);
    let found = repo
        .find_all_by_search(&OrderSearch {
            member_name: Some("userA".to_string()),
            order_status: Some(OrderStatus::Cancel),
        })
        .await?;

    assert!(found.is_empty());

    Ok(())
}
