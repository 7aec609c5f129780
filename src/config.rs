//! Configuration module
//!
//! Application settings are read from a TOML file, by default
//! `~/.config/shop-catalog/config.toml`. A missing file yields the defaults;
//! `DATABASE_URL` overrides the `[database]` section.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::shared::ConfigError;

const APP_DIR: &str = "shop-catalog";
const CONFIG_FILE: &str = "config.toml";

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILE)
}

/// Root of the TOML configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub api_host: String,
    pub api_port: u16,
    /// Prefix for every catalog route
    pub api_prefix: String,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 3000,
            api_prefix: "/api".to_string(),
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// `sqlite` or `postgres`
    pub driver: String,
    /// SQLite database file
    pub path: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    pub password: String,
    pub pool: PoolConfig,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            driver: "sqlite".to_string(),
            path: "./shop.db".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            name: "shop".to_string(),
            username: "postgres".to_string(),
            password: String::new(),
            pool: PoolConfig::default(),
        }
    }
}

impl DatabaseSettings {
    /// Connection URL for SeaORM. `DATABASE_URL` wins when set.
    pub fn connection_url(&self) -> String {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                return url;
            }
        }
        self.url_from_fields()
    }

    fn url_from_fields(&self) -> String {
        match self.driver.as_str() {
            "postgres" => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.username, self.password, self.host, self.port, self.name
            ),
            _ => format!("sqlite://{}?mode=rwc", self.path),
        }
    }
}

/// Connection pool bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 8,
            idle_timeout_secs: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Reseed the catalog once after migrations
    pub on_startup: bool,
}

impl AppConfig {
    /// Load from `path`. A missing file is not an error and yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Write to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.api_port == 0 {
            return Err(ConfigError::Invalid("server.api_port must be non-zero".into()));
        }
        if !self.server.api_prefix.is_empty() && !self.server.api_prefix.starts_with('/') {
            return Err(ConfigError::Invalid(
                "server.api_prefix must start with '/'".into(),
            ));
        }
        if !matches!(self.database.driver.as_str(), "sqlite" | "postgres") {
            return Err(ConfigError::Invalid(format!(
                "database.driver must be 'sqlite' or 'postgres' (got '{}')",
                self.database.driver
            )));
        }
        let pool = &self.database.pool;
        if pool.max_connections == 0 || pool.min_connections > pool.max_connections {
            return Err(ConfigError::Invalid(
                "database.pool requires 0 < min_connections <= max_connections".into(),
            ));
        }
        if !matches!(self.logging.format.to_lowercase().as_str(), "text" | "json") {
            return Err(ConfigError::Invalid(format!(
                "logging.format must be 'text' or 'json' (got '{}')",
                self.logging.format
            )));
        }
        Ok(())
    }
}
