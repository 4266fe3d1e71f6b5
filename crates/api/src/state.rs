use std::sync::Arc;

use atelier_storage::BlobStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: atelier_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Image blob store backend.
    pub blob: Arc<dyn BlobStore>,
}
