//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert straight into the tables and bypass
//! the service layer, so they never touch item stock.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::create_member(&db).await?;
//! let book = factory::create_book(&db).await?;
//!
//! // Order with one line of two books
//! let (member, delivery, order, lines) =
//!     factory::helpers::create_order_with_items(&db, &[(&book, 2)]).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let member = factory::member::MemberFactory::new(&db)
//!     .name("userA")
//!     .address("Seoul", "1st", "11111")
//!     .build()
//!     .await?;
//!
//! let album = factory::item::ItemFactory::album(&db)
//!     .price(20_000)
//!     .stock_quantity(5)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `member` - Create member entities
//! - `item` - Create book, album and movie entities
//! - `delivery` - Create delivery entities
//! - `order` - Create order and order line entities
//! - `helpers` - Convenience methods for creating orders with their dependencies

pub mod delivery;
pub mod helpers;
pub mod item;
pub mod member;
pub mod order;

pub use delivery::create_delivery;
pub use item::{create_album, create_book, create_movie};
pub use member::create_member;
pub use order::{create_order, create_order_item};
