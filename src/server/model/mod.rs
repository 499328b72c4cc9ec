//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models or query rows after they leave the repositories and transformed to DTOs at the
//! controller boundary. Business rules that touch a single aggregate (stock reservation,
//! order cancellation) live on these types rather than in the services.

pub mod address;
pub mod delivery;
pub mod item;
pub mod member;
pub mod order;
pub mod order_query;
