//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{delivery::DeliveryFactory, member::create_member, order};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete order hierarchy for the given items.
///
/// This is a convenience method that creates:
/// 1. Member (with a default address)
/// 2. Delivery (`READY`, at the member's address)
/// 3. Order (`ORDER`)
/// 4. One order line per `(item, count)` pair, priced at the item's current price
///
/// # Arguments
/// - `db` - Database connection
/// - `items` - Items and quantities for the order lines
///
/// # Returns
/// - `Ok((member, delivery, order, order_items))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_items(
    db: &DatabaseConnection,
    items: &[(&entity::item::Model, i32)],
) -> Result<
    (
        entity::member::Model,
        entity::delivery::Model,
        entity::order::Model,
        Vec<entity::order_item::Model>,
    ),
    DbErr,
> {
    let member = create_member(db).await?;
    let (order, delivery, order_items) = create_order_for_member(db, &member, items).await?;

    Ok((member, delivery, order, order_items))
}

/// Creates an order for an existing member.
///
/// Useful when several orders must belong to the same member, e.g. when testing
/// member-name search filters.
///
/// # Returns
/// - `Ok((order, delivery, order_items))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_for_member(
    db: &DatabaseConnection,
    member: &entity::member::Model,
    items: &[(&entity::item::Model, i32)],
) -> Result<
    (
        entity::order::Model,
        entity::delivery::Model,
        Vec<entity::order_item::Model>,
    ),
    DbErr,
> {
    let delivery = DeliveryFactory::new(db)
        .address(
            member.city.clone(),
            member.street.clone(),
            member.zipcode.clone(),
        )
        .build()
        .await?;
    let order = order::create_order(db, member.id, delivery.id).await?;

    let mut order_items = Vec::with_capacity(items.len());
    for (item, count) in items {
        order_items.push(order::create_order_item(db, order.id, item.id, item.price, *count).await?);
    }

    Ok((order, delivery, order_items))
}
