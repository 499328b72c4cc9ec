use super::*;
use crate::server::{
    error::internal::InternalError,
    model::item::{CreateItemParams, ItemKind, UpdateItemParams},
    service::item::ItemService,
};

/// Tests that a saved album is read back with its subtype fields.
///
/// Expected: Ok with an album kind
#[tokio::test]
async fn saved_item_is_found_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ItemService::new(db);
    let item = service
        .save(CreateItemParams {
            name: "Album".to_string(),
            price: 15_000,
            stock_quantity: 9,
            kind: ItemKind::Album {
                artist: Some("IU".to_string()),
                etc: None,
            },
        })
        .await?;

    let found = service.find_one(item.id).await?.unwrap();
    assert_eq!(found, item);
    assert_eq!(
        found.kind,
        ItemKind::Album {
            artist: Some("IU".to_string()),
            etc: None,
        }
    );

    Ok(())
}

/// Expected: Err(AppError::BadRequest) for negative stock
#[tokio::test]
async fn rejects_negative_stock() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ItemService::new(db);
    let result = service
        .save(CreateItemParams {
            name: "Book".to_string(),
            price: 1,
            stock_quantity: -1,
            kind: ItemKind::Book {
                author: None,
                isbn: None,
            },
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Expected: Ok(None) when updating an unknown item
#[tokio::test]
async fn update_of_missing_item_returns_none() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ItemService::new(db);
    let result = service
        .update(UpdateItemParams {
            id: 404,
            name: "Ghost".to_string(),
            price: 0,
            stock_quantity: 0,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a row with an unknown discriminator surfaces as an internal error.
///
/// Expected: Err(InternalError::UnknownItemType)
#[tokio::test]
async fn corrupt_discriminator_is_internal_error() -> Result<(), AppError> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let corrupt = factory::item::ItemFactory::book(db)
        .dtype("Z")
        .build()
        .await?;

    let service = ItemService::new(db);
    let result = service.find_one(corrupt.id).await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::UnknownItemType { .. }))
    ));

    Ok(())
}
