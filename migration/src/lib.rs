pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_member_table;
mod m20260101_000002_create_item_table;
mod m20260101_000003_create_delivery_table;
mod m20260101_000004_create_orders_table;
mod m20260101_000005_create_order_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_member_table::Migration),
            Box::new(m20260101_000002_create_item_table::Migration),
            Box::new(m20260101_000003_create_delivery_table::Migration),
            Box::new(m20260101_000004_create_orders_table::Migration),
            Box::new(m20260101_000005_create_order_item_table::Migration),
        ]
    }
}
