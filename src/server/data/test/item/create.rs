use super::*;

/// Tests that a book stores its discriminator and only the book columns.
///
/// Expected: Ok with dtype `B`, author and isbn set, other subtype columns null
#[tokio::test]
async fn stores_book_columns_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);
    let item = repo
        .create(CreateItemParams {
            name: "JPA1 BOOK".to_string(),
            price: 10_000,
            stock_quantity: 100,
            kind: ItemKind::Book {
                author: Some("kim".to_string()),
                isbn: Some("1234".to_string()),
            },
        })
        .await?;

    let stored = repo.find_by_id(item.id).await?.unwrap();
    assert_eq!(stored.dtype, "B");
    assert_eq!(stored.author.as_deref(), Some("kim"));
    assert_eq!(stored.isbn.as_deref(), Some("1234"));
    assert_eq!(stored.artist, None);
    assert_eq!(stored.director, None);

    Ok(())
}

/// Expected: Ok with dtype `M` and movie columns set
#[tokio::test]
async fn stores_movie_discriminator() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db);
    let item = repo
        .create(CreateItemParams {
            name: "Movie".to_string(),
            price: 5_000,
            stock_quantity: 3,
            kind: ItemKind::Movie {
                director: Some("Bong".to_string()),
                actor: Some("Song".to_string()),
            },
        })
        .await?;

    assert_eq!(item.dtype, "M");
    assert_eq!(item.director.as_deref(), Some("Bong"));
    assert_eq!(item.author, None);

    Ok(())
}
