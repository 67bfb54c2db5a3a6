use std::str::FromStr;

use talent_core::persist::PersistScope;

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be set")]
    Missing { var: &'static str },

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `9090`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted upload body in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
    /// Recorded as `created_by` on every stored candidate.
    pub upload_created_by: String,
    /// Which rows of an accepted upload are stored.
    pub persist_scope: PersistScope,
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Connection pool size (default: `20`).
    pub database_max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                 |
    /// |----------------------------|-------------------------|
    /// | `HOST`                     | `0.0.0.0`               |
    /// | `PORT`                     | `9090`                  |
    /// | `CORS_ORIGINS`             | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                    |
    /// | `MAX_UPLOAD_BYTES`         | `10485760`              |
    /// | `UPLOAD_CREATED_BY`        | `bulk-upload`           |
    /// | `UPLOAD_PERSIST_SCOPE`     | `all`                   |
    /// | `DATABASE_URL`             | (required)              |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("HOST", "0.0.0.0");
        let port = parse_env("PORT", "9090")?;

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", "30")?;
        let max_upload_bytes = parse_env("MAX_UPLOAD_BYTES", "10485760")?;
        let upload_created_by = env_or("UPLOAD_CREATED_BY", "bulk-upload");
        let persist_scope = parse_env("UPLOAD_PERSIST_SCOPE", "all")?;

        let database_url = std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing {
            var: "DATABASE_URL",
        })?;
        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", "20")?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            upload_created_by,
            persist_scope,
            database_url,
            database_max_connections,
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.into())
}

fn parse_env<T>(var: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = env_or(var, default);
    value.parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}
