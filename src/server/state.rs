//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: the database connection is a pooled handle, and the registry and
//! URI builder are reference-counted. Both are read-only after startup, so
//! request handlers can use them concurrently without locking.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::representation::{
    property_mapping::PropertyMappingRegistry, uri::ResourceUriBuilder,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Sort-key mapping tables, fully populated before the first request.
    pub mapping_registry: Arc<PropertyMappingRegistry>,

    /// Renders all link and pagination hrefs against the configured base URL.
    pub uri_builder: Arc<ResourceUriBuilder>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `mapping_registry` - Property mapping registry built at startup
    /// - `uri_builder` - URI builder for link generation
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        mapping_registry: Arc<PropertyMappingRegistry>,
        uri_builder: Arc<ResourceUriBuilder>,
    ) -> Self {
        Self {
            db,
            mapping_registry,
            uri_builder,
        }
    }
}
