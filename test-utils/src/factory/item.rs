//! Item factory for creating books, albums and movies.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test items of any subtype.
///
/// Subtype-specific columns are filled with placeholder values derived from the
/// generated id; the shared columns can be customized.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::item::ItemFactory;
///
/// let book = ItemFactory::book(&db)
///     .name("JPA BOOK")
///     .price(10_000)
///     .stock_quantity(100)
///     .build()
///     .await?;
/// ```
pub struct ItemFactory<'a> {
    db: &'a DatabaseConnection,
    model: entity::item::ActiveModel,
}

impl<'a> ItemFactory<'a> {
    fn with_dtype(db: &'a DatabaseConnection, dtype: &str, label: &str) -> (Self, u64) {
        let id = next_id();
        let model = entity::item::ActiveModel {
            dtype: ActiveValue::Set(dtype.to_string()),
            name: ActiveValue::Set(format!("{} {}", label, id)),
            price: ActiveValue::Set(10_000),
            stock_quantity: ActiveValue::Set(100),
            author: ActiveValue::Set(None),
            isbn: ActiveValue::Set(None),
            artist: ActiveValue::Set(None),
            etc: ActiveValue::Set(None),
            director: ActiveValue::Set(None),
            actor: ActiveValue::Set(None),
            ..Default::default()
        };

        (Self { db, model }, id)
    }

    /// Book defaults: price 10000, stock 100, author and isbn filled.
    pub fn book(db: &'a DatabaseConnection) -> Self {
        let (mut factory, id) = Self::with_dtype(db, "B", "Book");
        factory.model.author = ActiveValue::Set(Some(format!("Author {}", id)));
        factory.model.isbn = ActiveValue::Set(Some(format!("ISBN-{}", id)));
        factory
    }

    /// Album defaults: price 10000, stock 100, artist and etc filled.
    pub fn album(db: &'a DatabaseConnection) -> Self {
        let (mut factory, id) = Self::with_dtype(db, "A", "Album");
        factory.model.artist = ActiveValue::Set(Some(format!("Artist {}", id)));
        factory.model.etc = ActiveValue::Set(Some("etc".to_string()));
        factory
    }

    /// Movie defaults: price 10000, stock 100, director and actor filled.
    pub fn movie(db: &'a DatabaseConnection) -> Self {
        let (mut factory, id) = Self::with_dtype(db, "M", "Movie");
        factory.model.director = ActiveValue::Set(Some(format!("Director {}", id)));
        factory.model.actor = ActiveValue::Set(Some(format!("Actor {}", id)));
        factory
    }

    /// Sets the item name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = ActiveValue::Set(name.into());
        self
    }

    /// Sets the unit price.
    pub fn price(mut self, price: i32) -> Self {
        self.model.price = ActiveValue::Set(price);
        self
    }

    /// Sets the stock quantity.
    pub fn stock_quantity(mut self, stock_quantity: i32) -> Self {
        self.model.stock_quantity = ActiveValue::Set(stock_quantity);
        self
    }

    /// Overrides the discriminator, e.g. to insert a corrupt row.
    pub fn dtype(mut self, dtype: impl Into<String>) -> Self {
        self.model.dtype = ActiveValue::Set(dtype.into());
        self
    }

    /// Builds and inserts the item entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::item::Model)` - Created item entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::item::Model, DbErr> {
        self.model.insert(self.db).await
    }
}

/// Creates a book with default values.
pub async fn create_book(db: &DatabaseConnection) -> Result<entity::item::Model, DbErr> {
    ItemFactory::book(db).build().await
}

/// Creates an album with default values.
pub async fn create_album(db: &DatabaseConnection) -> Result<entity::item::Model, DbErr> {
    ItemFactory::album(db).build().await
}

/// Creates a movie with default values.
pub async fn create_movie(db: &DatabaseConnection) -> Result<entity::item::Model, DbErr> {
    ItemFactory::movie(db).build().await
}
