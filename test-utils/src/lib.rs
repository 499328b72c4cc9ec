//! Shop Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the shop
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for inserting rows with sensible defaults, and a query
//! counter for asserting how many statements a query strategy issues.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **QueryCounter**: Counts statements executed against the test database
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn lists_orders() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new().with_shop_tables().build().await?;
//!     let counter = test.count_queries().await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!     assert_eq!(counter.get(), 1);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod counter;
pub mod error;
pub mod factory;
