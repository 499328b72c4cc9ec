//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories return SeaORM entity models or projection
//! rows and never apply business rules. Every repository is generic over
//! `ConnectionTrait`, so services can run the same queries on the pool or inside a
//! transaction.

pub mod delivery;
pub mod item;
pub mod member;
pub mod order;
pub mod order_query;

#[cfg(test)]
mod test;

use sea_orm::{EntityTrait, IdenStatic, Iterable, QuerySelect};

/// Adds every column of `E` to `select`, aliased as `{prefix}{column}`.
///
/// Used to select several entities in one joined statement without their column
/// names colliding. The matching `FromQueryResult` impl reads each entity back with
/// the same prefix.
pub(crate) fn select_prefixed<E, S>(select: S, prefix: &str) -> S
where
    E: EntityTrait,
    S: QuerySelect,
{
    E::Column::iter().fold(select, |select, column| {
        select.column_as(column, format!("{}{}", prefix, column.as_str()))
    })
}
