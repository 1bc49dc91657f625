//! Persistence layer for notes: pool setup, migrations, models, and the
//! note repository.
//!
//! Two backends are supported behind one runtime-selected [`DbPool`]:
//! SQLite for development and tests, MySQL/MariaDB for production.

use std::fmt;

use notes_core::config::{parse_value, ConfigError};
use sqlx::any::AnyPoolOptions;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::ConnectOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::AnyPool;

/// Default database location for local development.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://notes.db";

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Production (MySQL/MariaDB) connection defaults.
pub const DEFAULT_DB_USER: &str = "notes_user";
pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_NAME: &str = "notes_db";

/// The database engine behind a connection URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbBackend {
    Sqlite,
    MySql,
}

impl DbBackend {
    /// Detect the backend from a URL scheme. `mariadb://` is served by the
    /// MySQL driver.
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("sqlite:") {
            Some(Self::Sqlite)
        } else if url.starts_with("mysql:") || url.starts_with("mariadb:") {
            Some(Self::MySql)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::MySql => "mysql",
        }
    }
}

impl fmt::Display for DbBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database configuration, resolved once at startup.
///
/// The repository layer only ever sees the resulting [`DbPool`], never this
/// struct, so nothing above `create_pool` depends on where the data lives.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub backend: DbBackend,
    /// Connection URL. May carry credentials; log `backend`, not this.
    pub url: String,
    /// Pool size (default: `10`).
    pub max_connections: u32,
}

impl DbConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// With `ENVIRONMENT=production` the MySQL/MariaDB connection is built
    /// from the `DB_*` variables and `DATABASE_URL` is ignored:
    ///
    /// | Env Var              | Default             |
    /// |----------------------|---------------------|
    /// | `DB_USER`            | `notes_user`        |
    /// | `DB_PASSWORD`        | (none)              |
    /// | `DB_HOST`            | `localhost`         |
    /// | `DB_PORT`            | `3306`              |
    /// | `DB_NAME`            | `notes_db`          |
    ///
    /// Otherwise `DATABASE_URL` (default `sqlite://notes.db`) picks the
    /// backend by its scheme. `DB_MAX_CONNECTIONS` (default `10`) applies to
    /// both.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => parse_value("DB_MAX_CONNECTIONS", &raw, "u32")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let production = lookup("ENVIRONMENT").is_some_and(|env| env == "production");
        if production {
            return Ok(Self {
                backend: DbBackend::MySql,
                url: mysql_url(&lookup)?,
                max_connections,
            });
        }

        let url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let backend = DbBackend::from_url(&url).ok_or_else(|| ConfigError {
            key: "DATABASE_URL",
            expected: "sqlite:// or mysql:// URL",
            value: url.clone(),
        })?;
        let url = match backend {
            DbBackend::Sqlite => with_create_mode(url),
            DbBackend::MySql => url,
        };

        Ok(Self {
            backend,
            url,
            max_connections,
        })
    }
}

/// Build the production MySQL URL from the `DB_*` variables. The password is
/// percent-encoded by sqlx.
fn mysql_url(lookup: &impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
    let port = match lookup("DB_PORT") {
        Some(raw) => parse_value("DB_PORT", &raw, "u16")?,
        None => DEFAULT_DB_PORT,
    };
    let user = lookup("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string());
    let host = lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
    let name = lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string());

    let mut options = MySqlConnectOptions::new()
        .host(&host)
        .port(port)
        .username(&user)
        .database(&name);
    if let Some(password) = lookup("DB_PASSWORD") {
        options = options.password(&password);
    }
    Ok(options.to_url_lossy().to_string())
}

/// Ask SQLite to create the database file on first use unless the URL
/// already names a mode (or is in-memory).
fn with_create_mode(url: String) -> String {
    if url.contains("mode=") || url.contains(":memory:") {
        return url;
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}mode=rwc")
}

/// Create a connection pool from the database configuration.
///
/// SQLite connections switch to WAL mode so readers proceed while a write is
/// in flight.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    sqlx::any::install_default_drivers();
    tracing::debug!(
        backend = %config.backend,
        max_connections = config.max_connections,
        "Opening database pool"
    );

    let mut options = AnyPoolOptions::new().max_connections(config.max_connections);
    if config.backend == DbBackend::Sqlite {
        options = options.after_connect(|conn, _meta| {
            Box::pin(async move {
                sqlx::query("PRAGMA journal_mode = WAL").execute(conn).await?;
                Ok(())
            })
        });
    }
    options.connect(&config.url).await
}

/// Check that the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations for `backend` from `db/migrations/<backend>`.
pub async fn run_migrations(
    pool: &DbPool,
    backend: DbBackend,
) -> Result<(), sqlx::migrate::MigrateError> {
    match backend {
        DbBackend::Sqlite => sqlx::migrate!("../../db/migrations/sqlite").run(pool).await,
        DbBackend::MySql => sqlx::migrate!("../../db/migrations/mysql").run(pool).await,
    }
}
