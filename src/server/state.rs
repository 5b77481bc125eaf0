//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into each handler through Axum's
//! state extraction. It replaces any process-wide globals: handlers reach the database only
//! through the state they are given.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a connection pool, so clones share it. Each request checks a
/// connection out of the pool for the duration of a statement or transaction and the pool
/// takes it back when the guard is dropped, on success and error paths alike.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided database pool.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
