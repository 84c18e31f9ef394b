use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Lazily connecting database pool.
    pub pool: tate_db::DbPool,
    /// Server configuration, including the default report filter.
    pub config: Arc<ServerConfig>,
}
