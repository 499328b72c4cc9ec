//! HTTP request handlers.
//!
//! Controllers convert DTOs into params, call the services and convert the resulting
//! domain models back into DTOs. Each handler carries a `#[utoipa::path]` annotation
//! that feeds the OpenAPI document served under `/swagger-ui`.

pub mod item;
pub mod member;
pub mod order;
pub mod simple_order;

#[cfg(test)]
mod test;
