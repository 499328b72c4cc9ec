use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::item::{CreateItemParams, ItemKind, UpdateItemParams};

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an item, writing the discriminator and only its subtype's columns
    pub async fn create(&self, params: CreateItemParams) -> Result<entity::item::Model, DbErr> {
        let mut model = entity::item::ActiveModel {
            dtype: ActiveValue::Set(params.kind.dtype().to_string()),
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            stock_quantity: ActiveValue::Set(params.stock_quantity),
            author: ActiveValue::Set(None),
            isbn: ActiveValue::Set(None),
            artist: ActiveValue::Set(None),
            etc: ActiveValue::Set(None),
            director: ActiveValue::Set(None),
            actor: ActiveValue::Set(None),
            ..Default::default()
        };

        match params.kind {
            ItemKind::Book { author, isbn } => {
                model.author = ActiveValue::Set(author);
                model.isbn = ActiveValue::Set(isbn);
            }
            ItemKind::Album { artist, etc } => {
                model.artist = ActiveValue::Set(artist);
                model.etc = ActiveValue::Set(etc);
            }
            ItemKind::Movie { director, actor } => {
                model.director = ActiveValue::Set(director);
                model.actor = ActiveValue::Set(actor);
            }
        }

        model.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::item::Model>, DbErr> {
        entity::prelude::Item::find_by_id(id).one(self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::item::Model>, DbErr> {
        entity::prelude::Item::find()
            .order_by_asc(entity::item::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates the shared columns of an item; returns false if it does not exist
    pub async fn update(&self, params: UpdateItemParams) -> Result<bool, DbErr> {
        let result = entity::prelude::Item::update_many()
            .col_expr(entity::item::Column::Name, Expr::value(params.name))
            .col_expr(entity::item::Column::Price, Expr::value(params.price))
            .col_expr(
                entity::item::Column::StockQuantity,
                Expr::value(params.stock_quantity),
            )
            .filter(entity::item::Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Adds `delta` (negative to reserve) to the stored stock in a single statement
    pub async fn adjust_stock(&self, id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::Item::update_many()
            .col_expr(
                entity::item::Column::StockQuantity,
                Expr::col(entity::item::Column::StockQuantity).add(delta),
            )
            .filter(entity::item::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
