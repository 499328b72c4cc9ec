//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed
//! by the application. The state is initialized once during startup and then cloned
//! for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool and
/// clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Maximum number of ids per `IN (...)` list used by batch-fetching listings.
    pub batch_fetch_size: usize,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `batch_fetch_size` - Chunk size for batch-fetched collections
    pub fn new(db: DatabaseConnection, batch_fetch_size: usize) -> Self {
        Self {
            db,
            batch_fetch_size,
        }
    }
}
