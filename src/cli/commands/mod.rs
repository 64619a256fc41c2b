//! CLI command implementations.

pub mod init;
pub mod phrase;
pub mod serve;
pub mod template;
pub mod user;

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::adapters::sqlite::initialize_with_config;
use crate::domain::models::Config;

/// Open the configured database, applying pending migrations.
pub(crate) async fn open_database(config: &Config) -> Result<SqlitePool> {
    initialize_with_config(&config.database)
        .await
        .with_context(|| format!("Failed to open database at {}", config.database.path))
}
