//! Shared helpers for repository integration tests.

#![allow(dead_code)]

use notes_db::{DbBackend, DbConfig, DbPool};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::ConnectOptions;

/// Open the runtime-selected pool on the migrated database that
/// `#[sqlx::test]` prepared for this test.
pub async fn connect(options: SqliteConnectOptions) -> DbPool {
    let config = DbConfig {
        backend: DbBackend::Sqlite,
        url: options.to_url_lossy().to_string(),
        max_connections: 4,
    };
    notes_db::create_pool(&config).await.unwrap()
}
