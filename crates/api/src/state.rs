use std::sync::Arc;

use datapusher_dispatch::DispatchEngine;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference counted internally and the rest
/// sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: datapusher_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Fan-out engine shared by all ingress requests (one HTTP client pool).
    pub dispatcher: Arc<DispatchEngine>,
}
