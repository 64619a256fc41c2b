use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;
use crate::domain::models::MAX_SESSION_MINUTES;

/// Project directory holding configuration, database and phrase cache.
pub const PROJECT_DIR: &str = ".forest";

/// Prefix for environment overrides, e.g. `FOREST_SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "FOREST_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),

    #[error("Database path cannot be empty")]
    EmptyDatabasePath,

    #[error("Invalid max_connections: {0}. Must be at least 1")]
    InvalidMaxConnections(u32),

    #[error("Invalid server port: 0")]
    InvalidPort,

    #[error("Invalid default session length: {0}. Must be between 1 and {MAX_SESSION_MINUTES}")]
    InvalidSessionMinutes(u32),

    #[error("Invalid phrase history capacity: {0}. Must be at least 1")]
    InvalidHistoryCapacity(usize),

    #[error("Phrase cache path cannot be empty")]
    EmptyCachePath,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .forest/config.yaml (project config, created by init)
    /// 3. .forest/local.yaml (project local overrides, optional)
    /// 4. Environment variables (FOREST_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        Self::load_from_dir(Path::new("."))
    }

    /// Same as [`load`](Self::load), with the project directory under `root`.
    pub fn load_from_dir(root: &Path) -> Result<Config> {
        let project = root.join(PROJECT_DIR);
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(project.join("config.yaml")))
            .merge(Yaml::file(project.join("local.yaml")))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        if config.database.path.trim().is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }

        if config.database.max_connections == 0 {
            return Err(ConfigError::InvalidMaxConnections(
                config.database.max_connections,
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(config.logging.rotation.clone()));
        }

        let minutes = config.pomodoro.default_minutes;
        if minutes == 0 || minutes > MAX_SESSION_MINUTES {
            return Err(ConfigError::InvalidSessionMinutes(minutes));
        }

        if config.phrases.history_capacity == 0 {
            return Err(ConfigError::InvalidHistoryCapacity(0));
        }

        if config.phrases.cache_path.trim().is_empty() {
            return Err(ConfigError::EmptyCachePath);
        }

        Ok(())
    }
}
