//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `itemhub.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values:
//!
//! | Variable                  | Field                       |
//! |---------------------------|-----------------------------|
//! | `ITEMHUB_HOST`            | `server.host`               |
//! | `ITEMHUB_PORT`            | `server.port`               |
//! | `ITEMHUB_BIND`            | `server.host`+`server.port` |
//! | `ITEMHUB_DATABASE_URL`    | `database.url`              |
//! | `ITEMHUB_MAX_CONNECTIONS` | `database.max_connections`  |
//! | `ITEMHUB_LOG`             | `logging.filter`            |
//! | `RUST_LOG`                | `logging.filter`            |
//!
//! `ITEMHUB_BIND` is applied after `ITEMHUB_HOST`/`ITEMHUB_PORT`.
//! `RUST_LOG` is only consulted when `ITEMHUB_LOG` is unset.
//! A numeric variable that does not parse is an error, not a silent fallback.

use std::str::FromStr;

use serde::Deserialize;

const CONFIG_FILE: &str = "itemhub.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL.
    pub url: String,
    /// Upper bound on pooled connections. In-memory URLs always use one.
    pub max_connections: u32,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`EnvFilter` syntax).
    pub filter: String,
}

impl Config {
    /// Load `itemhub.toml` (if present), apply the process environment and
    /// validate the result.
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE, |key| std::env::var(key).ok())
    }

    /// Load `path` (if present), apply overrides read through `env` and
    /// validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, if
    /// an override holds an unparseable value, or if the final values are
    /// invalid.
    pub fn load_from(
        path: &str,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_overrides(env)?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(host) = env("ITEMHUB_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env("ITEMHUB_PORT") {
            self.server.port = parse_env("ITEMHUB_PORT", &port)?;
        }
        if let Some(bind) = env("ITEMHUB_BIND") {
            let (host, port) = bind.rsplit_once(':').ok_or_else(|| ConfigError::InvalidEnv {
                key: "ITEMHUB_BIND",
                value: bind.clone(),
            })?;
            self.server.port = parse_env("ITEMHUB_BIND", port)?;
            self.server.host = host.to_string();
        }
        if let Some(url) = env("ITEMHUB_DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(max) = env("ITEMHUB_MAX_CONNECTIONS") {
            self.database.max_connections = parse_env("ITEMHUB_MAX_CONNECTIONS", &max)?;
        }
        if let Some(filter) = env("ITEMHUB_LOG").or_else(|| env("RUST_LOG")) {
            self.logging.filter = filter;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.is_empty() {
            return Err(ConfigError::Validation("host must not be empty".to_string()));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::Validation(
                "database url must not be empty".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "max_connections must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

fn parse_env<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        key,
        value: value.to_string(),
    })
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:itemhub.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "itemhubd=info,itemhub=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// An environment override holds a value of the wrong shape.
    #[error("invalid value `{value}` for {key}")]
    InvalidEnv { key: &'static str, value: String },
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
