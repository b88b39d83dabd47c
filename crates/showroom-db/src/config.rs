//! Database connection configuration.
//!
//! Settings come from the builder or from environment variables, with
//! development defaults for everything else.
//!
//! | Variable                       | Default     |
//! |--------------------------------|-------------|
//! | `SHOWROOM_DATABASE_URL`        | (unset)     |
//! | `SHOWROOM_DB_HOST`             | `localhost` |
//! | `SHOWROOM_DB_PORT`             | `5432`      |
//! | `SHOWROOM_DB_NAME`             | `showroom`  |
//! | `SHOWROOM_DB_USER`             | `showroom`  |
//! | `SHOWROOM_DB_PASSWORD`         | `showroom`  |
//! | `SHOWROOM_DB_MAX_CONNECTIONS`  | `5`         |
//!
//! A full URL wins over the discrete variables.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

pub const ENV_DATABASE_URL: &str = "SHOWROOM_DATABASE_URL";
pub const ENV_HOST: &str = "SHOWROOM_DB_HOST";
pub const ENV_PORT: &str = "SHOWROOM_DB_PORT";
pub const ENV_NAME: &str = "SHOWROOM_DB_NAME";
pub const ENV_USER: &str = "SHOWROOM_DB_USER";
pub const ENV_PASSWORD: &str = "SHOWROOM_DB_PASSWORD";
pub const ENV_MAX_CONNECTIONS: &str = "SHOWROOM_DB_MAX_CONNECTIONS";

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new()
///     .host("db.internal")
///     .credentials("sales", "secret")
///     .max_connections(2);
/// ```
#[derive(Clone)]
pub struct DbConfig {
    /// Full connection URL; overrides the discrete fields when set.
    pub url: Option<String>,

    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,

    /// Maximum number of connections.
    /// Default: 5
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 0 (connections are opened on demand)
    pub min_connections: u32,

    /// Connection / acquire timeout.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,

    /// Whether to run migrations on connect.
    /// Default: true
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a configuration with development defaults.
    pub fn new() -> Self {
        DbConfig {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            database: "showroom".to_string(),
            username: "showroom".to_string(),
            password: "showroom".to_string(),
            max_connections: 5,
            min_connections: 0,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Creates a configuration from a `postgres://` URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        DbConfig {
            url: Some(url.into()),
            ..DbConfig::new()
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DbConfig::new();

        config.url = lookup(ENV_DATABASE_URL).filter(|url| !url.trim().is_empty());

        if let Some(host) = lookup(ENV_HOST) {
            config.host = host;
        }

        if let Some(port) = lookup(ENV_PORT) {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_PORT.to_string()))?;
        }

        if let Some(name) = lookup(ENV_NAME) {
            config.database = name;
        }

        if let Some(user) = lookup(ENV_USER) {
            config.username = user;
        }

        if let Some(password) = lookup(ENV_PASSWORD) {
            config.password = password;
        }

        if let Some(max) = lookup(ENV_MAX_CONNECTIONS) {
            config.max_connections = max
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidValue(ENV_MAX_CONNECTIONS.to_string()))?;
        }

        Ok(config)
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Sets login and password together.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Builds the sqlx connect options.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match &self.url {
            Some(url) => PgConnectOptions::from_str(url)
                .map_err(|_| ConfigError::InvalidValue(ENV_DATABASE_URL.to_string())),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .database(&self.database)
                .username(&self.username)
                .password(&self.password)),
        }
    }

    /// Where this config points, without credentials. Used in log lines.
    pub fn target(&self) -> String {
        match &self.url {
            Some(url) => redact_url(url),
            None => format!("{}:{}/{}", self.host, self.port, self.database),
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig::new()
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("target", &self.target())
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("connect_timeout", &self.connect_timeout)
            .field("idle_timeout", &self.idle_timeout)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

/// Drops the `user:password@` part of a connection URL.
fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return "<invalid url>".to_string();
    };

    match rest.rsplit_once('@') {
        Some((_, host)) => format!("{}://{}", scheme, host),
        None => format!("{}://{}", scheme, rest),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
