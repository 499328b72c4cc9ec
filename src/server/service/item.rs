use sea_orm::DatabaseConnection;

use crate::server::{
    data::item::ItemRepository,
    error::AppError,
    model::item::{CreateItemParams, Item, UpdateItemParams},
};

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn save(&self, params: CreateItemParams) -> Result<Item, AppError> {
        params.validate()?;

        let repo = ItemRepository::new(self.db);
        let item = repo.create(params).await?;

        Ok(Item::from_entity(item)?)
    }

    pub async fn find_items(&self) -> Result<Vec<Item>, AppError> {
        let repo = ItemRepository::new(self.db);

        repo.find_all()
            .await?
            .into_iter()
            .map(|item| Item::from_entity(item).map_err(Into::into))
            .collect()
    }

    pub async fn find_one(&self, id: i32) -> Result<Option<Item>, AppError> {
        let repo = ItemRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .map(Item::from_entity)
            .transpose()
            .map_err(Into::into)
    }

    /// Updates name, price and stock of an item
    /// Returns None if the item doesn't exist
    pub async fn update(&self, params: UpdateItemParams) -> Result<Option<Item>, AppError> {
        params.validate()?;

        let repo = ItemRepository::new(self.db);
        let id = params.id;

        if !repo.update(params).await? {
            return Ok(None);
        }

        self.find_one(id).await
    }
}
