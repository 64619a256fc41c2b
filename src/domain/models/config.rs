use serde::{Deserialize, Serialize};

use super::session::DEFAULT_SESSION_MINUTES;

/// Main configuration structure for the forest backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Focus session defaults
    #[serde(default)]
    pub pomodoro: PomodoroConfig,

    /// Motivational phrase cache and picker
    #[serde(default)]
    pub phrases: PhrasesConfig,

    /// Ambient audio for focus sessions
    #[serde(default)]
    pub audio: AudioConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Path to `SQLite` database file
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Maximum number of database connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_path() -> String {
    ".forest/forest.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// `sqlx` connection URL for the configured path.
    pub fn url(&self) -> String {
        if self.path.starts_with("sqlite:") {
            self.path.clone()
        } else {
            format!("sqlite:{}", self.path)
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files. Stdout only when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,

    /// File rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

/// Focus session defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PomodoroConfig {
    /// Session length used when a request does not specify one
    #[serde(default = "default_session_minutes")]
    pub default_minutes: u32,
}

const fn default_session_minutes() -> u32 {
    DEFAULT_SESSION_MINUTES
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_session_minutes(),
        }
    }
}

/// Motivational phrase configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PhrasesConfig {
    /// Location of the daily JSON cache file
    #[serde(default = "default_cache_path")]
    pub cache_path: String,

    /// How many recently returned phrases the picker avoids
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Phrases used to refill an empty or stale cache
    #[serde(default = "default_seed_phrases")]
    pub seed: Vec<String>,
}

fn default_cache_path() -> String {
    ".forest/phrases_cache.json".to_string()
}

const fn default_history_capacity() -> usize {
    5
}

fn default_seed_phrases() -> Vec<String> {
    [
        "El éxito es la suma de pequeños esfuerzos repetidos día tras día.",
        "No cuentes los días, haz que los días cuenten.",
        "La disciplina es el puente entre las metas y los logros.",
        "Cada árbol grande empezó como una pequeña semilla.",
        "Concéntrate en el paso que tienes delante, no en toda la escalera.",
        "Lo que haces hoy puede mejorar todos tus mañanas.",
        "La constancia vence lo que la dicha no alcanza.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for PhrasesConfig {
    fn default() -> Self {
        Self {
            cache_path: default_cache_path(),
            history_capacity: default_history_capacity(),
            seed: default_seed_phrases(),
        }
    }
}

/// Ambient audio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AudioConfig {
    /// Candidate ambient tracks; one is chosen at random per session
    #[serde(default = "default_audio_urls")]
    pub urls: Vec<String>,
}

fn default_audio_urls() -> Vec<String> {
    vec!["https://assets.mixkit.co/sfx/preview/mixkit-forest-stream-ambience-loop-542.mp3".to_string()]
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            urls: default_audio_urls(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url() {
        let mut db = DatabaseConfig::default();
        assert_eq!(db.url(), "sqlite:.forest/forest.db");
        db.path = "sqlite::memory:".to_string();
        assert_eq!(db.url(), "sqlite::memory:");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("server:\n  port: 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.pomodoro.default_minutes, 25);
        assert_eq!(config.phrases.history_capacity, 5);
        assert!(!config.phrases.seed.is_empty());
    }
}
