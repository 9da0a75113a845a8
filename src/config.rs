//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export APP_ENV="prod"
//! export DATABASE_URL="sqlite://storage.db"
//! export LISTEN="0.0.0.0:8080"
//! ```
//!
//! ## Optional Variables
//!
//! - `APP_ENV` - `local`, `dev` or `prod` (default: `local`); selects log format and level
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite://storage.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `ALIAS_LENGTH` - Length of generated aliases (default: 6, range: 4-32)
//! - `REQUEST_TIMEOUT` - Per-request deadline in seconds (default: 4)
//! - `RUST_LOG` - Overrides the log level chosen by `APP_ENV`

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Deployment environment, selecting the logging setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Human-readable logs at `debug`.
    Local,
    /// JSON logs at `debug`.
    Dev,
    /// JSON logs at `info`.
    Prod,
}

impl Environment {
    pub fn default_log_level(self) -> &'static str {
        match self {
            Environment::Local | Environment::Dev => "debug",
            Environment::Prod => "info",
        }
    }

    pub fn json_logs(self) -> bool {
        !matches!(self, Environment::Local)
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Local => "local",
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        };
        f.write_str(name)
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: Environment,
    pub database_url: String,
    pub listen_addr: String,
    /// Length of aliases generated when the client does not supply one.
    pub alias_length: usize,
    /// Per-request deadline in seconds (`REQUEST_TIMEOUT`, default: 4).
    pub request_timeout: u64,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 10).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let env = match env::var("APP_ENV") {
            Ok(value) => value.parse().context("Failed to parse APP_ENV")?,
            Err(_) => Environment::Local,
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://storage.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let alias_length = parse_var("ALIAS_LENGTH", 6)?;
        let request_timeout = parse_var("REQUEST_TIMEOUT", 4)?;
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 10)?;
        let db_connect_timeout = parse_var("DB_CONNECT_TIMEOUT", 30)?;

        Ok(Self {
            env,
            database_url,
            listen_addr,
            alias_length,
            request_timeout,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `alias_length` is outside 4-32
    /// - `listen_addr` is invalid
    /// - `database_url` is not a SQLite URL
    /// - a timeout or the pool size is zero
    pub fn validate(&self) -> Result<()> {
        if !(4..=32).contains(&self.alias_length) {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 4 and 32, got {}",
                self.alias_length
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.request_timeout == 0 {
            anyhow::bail!("REQUEST_TIMEOUT must be greater than 0");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Alias length: {}", self.alias_length);
        tracing::info!("  Request timeout: {}s", self.request_timeout);
    }
}

/// Reads an optional numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, value)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
