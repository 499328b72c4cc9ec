use super::*;

/// Tests updating the shared columns of an album.
///
/// Expected: Ok(true) with name, price and stock replaced and subtype columns kept
#[tokio::test]
async fn updates_shared_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let album = factory::create_album(db).await?;

    let repo = ItemRepository::new(db);
    let updated = repo
        .update(UpdateItemParams {
            id: album.id,
            name: "Remastered".to_string(),
            price: 25_000,
            stock_quantity: 7,
        })
        .await?;

    assert!(updated);
    let stored = repo.find_by_id(album.id).await?.unwrap();
    assert_eq!(stored.name, "Remastered");
    assert_eq!(stored.price, 25_000);
    assert_eq!(stored.stock_quantity, 7);
    assert_eq!(stored.artist, album.artist);

    Ok(())
}

/// Expected: Ok(false) when the item does not exist
#[tokio::test]
async fn returns_false_for_missing_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);
    let updated = repo
        .update(UpdateItemParams {
            id: 404,
            name: "Ghost".to_string(),
            price: 0,
            stock_quantity: 0,
        })
        .await?;

    assert!(!updated);

    Ok(())
}
