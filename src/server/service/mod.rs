//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing validation and uniqueness rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Converting repository rows into domain models
//! - **Transaction Management**: Running order placement and cancellation atomically

pub mod item;
pub mod member;
pub mod order;
pub mod order_query;

#[cfg(test)]
mod test;
