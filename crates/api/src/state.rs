use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference counted internally and
/// the config sits behind an `Arc`). Handlers borrow a connection from the
/// pool per statement; it goes back to the pool on every exit path.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: notes_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
