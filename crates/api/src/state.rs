use std::sync::Arc;

use quill_core::avatar::AvatarStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: quill_db::DbPool,
    /// Server configuration (username policy, JWT settings, timeouts).
    pub config: Arc<ServerConfig>,
    /// Avatar blob storage.
    pub avatars: Arc<dyn AvatarStore>,
}
