//! Application state container shared across Axum route handlers.
//!
//! Holds the SeaORM connection pool. It is cheap to clone and is passed into
//! route handlers via Axum's `State<T>` extractor.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` wrapping the given database connection pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a cloned copy of the database connection.
    ///
    /// Useful for spawning tasks that require ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
