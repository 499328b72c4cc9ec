//! Delivery factory for creating test delivery entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating deliveries.
///
/// Defaults to a `READY` delivery without an address.
pub struct DeliveryFactory<'a> {
    db: &'a DatabaseConnection,
    city: Option<String>,
    street: Option<String>,
    zipcode: Option<String>,
    status: String,
}

impl<'a> DeliveryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            city: None,
            street: None,
            zipcode: None,
            status: "READY".to_string(),
        }
    }

    /// Sets the delivery address columns.
    pub fn address(
        mut self,
        city: Option<String>,
        street: Option<String>,
        zipcode: Option<String>,
    ) -> Self {
        self.city = city;
        self.street = street;
        self.zipcode = zipcode;
        self
    }

    /// Sets the raw status value (`READY`, `COMP`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the delivery entity into the database.
    pub async fn build(self) -> Result<entity::delivery::Model, DbErr> {
        entity::delivery::ActiveModel {
            city: ActiveValue::Set(self.city),
            street: ActiveValue::Set(self.street),
            zipcode: ActiveValue::Set(self.zipcode),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `READY` delivery without an address.
pub async fn create_delivery(db: &DatabaseConnection) -> Result<entity::delivery::Model, DbErr> {
    DeliveryFactory::new(db).build().await
}
