//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. Both fields are cheap to clone:
//! `DatabaseConnection` is a pool handle and `ContentService` keeps its HTTP client
//! and caches behind reference counts.

use sea_orm::DatabaseConnection;

use crate::server::service::content::ContentService;

#[derive(Clone)]
pub struct AppState {
    /// Postgres connection pool holding user accounts.
    pub db: DatabaseConnection,

    /// Loader for story and chapter data from the content API.
    pub content: ContentService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `content` - Content service bound to the configured content API
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, content: ContentService) -> Self {
        Self { db, content }
    }
}
