use super::*;

/// Tests that positive and negative deltas are applied to the stored stock.
///
/// Expected: 100 - 30 + 5 = 75
#[tokio::test]
async fn applies_deltas_to_stored_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::item::ItemFactory::book(db)
        .stock_quantity(100)
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    repo.adjust_stock(book.id, -30).await?;
    repo.adjust_stock(book.id, 5).await?;

    let stored = repo.find_by_id(book.id).await?.unwrap();
    assert_eq!(stored.stock_quantity, 75);

    Ok(())
}

/// Tests that other items are untouched.
///
/// Expected: Only the targeted item changes
#[tokio::test]
async fn leaves_other_items_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_book(db).await?;
    let other = factory::create_book(db).await?;

    let repo = ItemRepository::new(db);
    repo.adjust_stock(target.id, -1).await?;

    let stored = repo.find_by_id(other.id).await?.unwrap();
    assert_eq!(stored.stock_quantity, other.stock_quantity);

    Ok(())
}
