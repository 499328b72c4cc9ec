//! SeaORM entities for the shop schema.
//!
//! Each module maps one table. Embedded value objects (member and delivery
//! addresses) are flattened into nullable columns, and the item hierarchy is
//! stored in a single table distinguished by the `dtype` column.

pub mod prelude;

pub mod delivery;
pub mod item;
pub mod member;
pub mod order;
pub mod order_item;
