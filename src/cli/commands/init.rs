//! Implementation of the `forest init` command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

use crate::adapters::sqlite::{initialize_with_config, SqliteTemplateRepository};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, DatabaseConfig};
use crate::infrastructure::config::PROJECT_DIR;
use crate::services::TemplateService;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force reinitialization even if already initialized
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub initialized_path: PathBuf,
    pub config_written: bool,
    pub database_path: Option<PathBuf>,
    pub templates_seeded: usize,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![self.message.clone()];
        if self.config_written {
            lines.push(format!("\nWrote {PROJECT_DIR}/config.yaml"));
        }
        if let Some(db) = &self.database_path {
            lines.push(format!("Database initialized at {}", db.display()));
        }
        if self.templates_seeded > 0 {
            lines.push(format!("Seeded {} tree template(s)", self.templates_seeded));
        }
        lines.join("\n")
    }
}

pub async fn execute(args: InitArgs, config: &Config, json_mode: bool) -> Result<()> {
    let target_path = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir().context("Failed to get current directory")?.join(&args.path)
    };

    let project_dir = target_path.join(PROJECT_DIR);
    let config_path = project_dir.join("config.yaml");

    if config_path.exists() && !args.force {
        let output_data = InitOutput {
            success: false,
            message: "Project already initialized. Use --force to rewrite the configuration."
                .to_string(),
            initialized_path: target_path,
            config_written: false,
            database_path: None,
            templates_seeded: 0,
        };
        output(&output_data, json_mode);
        return Ok(());
    }

    fs::create_dir_all(&project_dir)
        .await
        .with_context(|| format!("Failed to create {}", project_dir.display()))?;

    let yaml = serde_yaml::to_string(config).context("Failed to serialize configuration")?;
    fs::write(&config_path, yaml)
        .await
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    let database_path = resolve(&target_path, &config.database.path);
    let database = DatabaseConfig {
        path: database_path.display().to_string(),
        max_connections: config.database.max_connections,
    };
    let pool = initialize_with_config(&database)
        .await
        .context("Failed to initialize database")?;

    let templates = TemplateService::new(Arc::new(SqliteTemplateRepository::new(pool.clone())));
    let templates_seeded = templates
        .seed_defaults()
        .await
        .context("Failed to seed tree templates")?;
    pool.close().await;

    let output_data = InitOutput {
        success: true,
        message: if args.force {
            "Project reinitialized successfully.".to_string()
        } else {
            "Project initialized successfully.".to_string()
        },
        initialized_path: target_path,
        config_written: true,
        database_path: Some(database_path),
        templates_seeded,
    };

    output(&output_data, json_mode);
    Ok(())
}

fn resolve(root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path.strip_prefix("sqlite:").unwrap_or(path));
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
