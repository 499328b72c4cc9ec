//! Order and order line factories.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating orders for an existing member and delivery.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db, member.id, delivery.id)
///     .status("CANCEL")
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    delivery_id: i32,
    order_date: DateTime<Utc>,
    status: String,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory dated now with status `ORDER`.
    pub fn new(db: &'a DatabaseConnection, member_id: i32, delivery_id: i32) -> Self {
        Self {
            db,
            member_id,
            delivery_id,
            order_date: Utc::now(),
            status: "ORDER".to_string(),
        }
    }

    /// Sets the order date.
    pub fn order_date(mut self, order_date: DateTime<Utc>) -> Self {
        self.order_date = order_date;
        self
    }

    /// Sets the raw status value (`ORDER`, `CANCEL`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the order entity into the database.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            member_id: ActiveValue::Set(self.member_id),
            delivery_id: ActiveValue::Set(self.delivery_id),
            order_date: ActiveValue::Set(self.order_date),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an `ORDER` order dated now.
pub async fn create_order(
    db: &DatabaseConnection,
    member_id: i32,
    delivery_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, member_id, delivery_id).build().await
}

/// Creates one order line.
///
/// # Arguments
/// - `order_price` - Unit price captured at order time
/// - `count` - Ordered quantity
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    item_id: i32,
    order_price: i32,
    count: i32,
) -> Result<entity::order_item::Model, DbErr> {
    entity::order_item::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        item_id: ActiveValue::Set(item_id),
        order_price: ActiveValue::Set(order_price),
        count: ActiveValue::Set(count),
        ..Default::default()
    }
    .insert(db)
    .await
}
