use axum::http::HeaderValue;
use notes_core::config::{env_parse, env_string, ConfigError};

/// Default allowed origins: the common frontend dev servers.
const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:5173,http://localhost:3000,http://localhost:8080";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Path prefix for the note routes (default: `/api`). Empty mounts them at the root.
    pub api_prefix: String,
    /// Deployment label reported by the info endpoint (default: `development`).
    pub environment: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173,...`|
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `API_PREFIX`           | `/api`                     |
    /// | `ENVIRONMENT`          | `development`              |
    pub fn from_env() -> Result<Self, ConfigError> {
        let cors_origins = parse_origins(&env_string("CORS_ORIGINS", DEFAULT_CORS_ORIGINS))?;

        Ok(Self {
            host: env_string("HOST", "0.0.0.0"),
            port: env_parse("PORT", 8000, "u16")?,
            cors_origins,
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS", 30, "u64")?,
            api_prefix: normalize_prefix(&env_string("API_PREFIX", "/api")),
            environment: env_string("ENVIRONMENT", "development"),
        })
    }

    /// `true` when `CORS_ORIGINS` is the `*` wildcard.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

/// Split a comma-separated origin list, rejecting values that are not valid
/// header values. Blank entries are ignored; an empty list falls back to `*`.
pub fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    for origin in &origins {
        if origin != "*" && origin.parse::<HeaderValue>().is_err() {
            return Err(ConfigError {
                key: "CORS_ORIGINS",
                expected: "origin",
                value: origin.clone(),
            });
        }
    }

    if origins.is_empty() {
        return Ok(vec!["*".to_string()]);
    }
    Ok(origins)
}

/// Normalize a route prefix to `/segment` form (leading slash, no trailing
/// slash). `""` and `"/"` both mean "no prefix" and yield `""`.
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
