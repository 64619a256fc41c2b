//! Tree template CLI commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::sqlite::SqliteTemplateRepository;
use crate::cli::commands::open_database;
use crate::cli::output::{output, table, truncate, CommandOutput};
use crate::domain::models::{Config, RewardCandidate, TreeTemplate};
use crate::services::{Actor, TemplateService};

#[derive(Args, Debug)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateCommands,
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// List the catalog in selection order
    List,
    /// Add a template
    Add {
        /// Tree name
        name: String,
        /// Category, e.g. Bosque
        #[arg(short, long)]
        category: String,
        /// Description shown to users
        #[arg(short, long, default_value = "")]
        description: String,
        /// Image URL
        #[arg(short, long, default_value = "")]
        image_url: String,
        /// Relative selection weight (defaults to 20)
        #[arg(short, long)]
        weight: Option<f64>,
    },
    /// Remove a template
    Remove {
        /// Template ID
        id: Uuid,
    },
    /// Insert the built-in catalog when no templates exist
    Seed,
}

#[derive(Debug, serde::Serialize)]
pub struct TemplateListOutput {
    pub templates: Vec<TreeTemplate>,
    pub total: usize,
}

impl CommandOutput for TemplateListOutput {
    fn to_human(&self) -> String {
        if self.templates.is_empty() {
            return "No tree templates found.".to_string();
        }

        let total_weight: f64 = self.templates.iter().map(|t| t.reward.weight).sum();
        let mut t = table(["ID", "Name", "Category", "Weight", "Chance"]);
        for template in &self.templates {
            let chance = template.reward.weight / total_weight * 100.0;
            t.add_row(vec![
                template.id.to_string()[..8].to_string(),
                truncate(&template.reward.name, 24),
                template.reward.category.clone(),
                format!("{:.1}", template.reward.weight),
                format!("{chance:.1}%"),
            ]);
        }
        format!("Found {} template(s):\n{t}", self.total)
    }
}

#[derive(Debug, serde::Serialize)]
pub struct TemplateActionOutput {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TreeTemplate>,
}

impl CommandOutput for TemplateActionOutput {
    fn to_human(&self) -> String {
        self.message.clone()
    }
}

pub async fn execute(args: TemplateArgs, config: &Config, json_mode: bool) -> Result<()> {
    let pool = open_database(config).await?;
    let service = TemplateService::new(Arc::new(SqliteTemplateRepository::new(pool)));

    match args.command {
        TemplateCommands::List => {
            let templates = service.list(Actor::Operator).await?;
            let total = templates.len();
            output(&TemplateListOutput { templates, total }, json_mode);
        }
        TemplateCommands::Add {
            name,
            category,
            description,
            image_url,
            weight,
        } => {
            let reward = RewardCandidate::new(name, category, description, image_url, weight);
            let template = service
                .create(Actor::Operator, reward)
                .await
                .context("Failed to add tree template")?;
            let out = TemplateActionOutput {
                success: true,
                message: format!("Added template {} ({})", template.reward.name, template.id),
                template: Some(template),
            };
            output(&out, json_mode);
        }
        TemplateCommands::Remove { id } => {
            service
                .delete(Actor::Operator, id)
                .await
                .with_context(|| format!("Failed to remove template {id}"))?;
            let out = TemplateActionOutput {
                success: true,
                message: format!("Removed template {id}"),
                template: None,
            };
            output(&out, json_mode);
        }
        TemplateCommands::Seed => {
            let seeded = service.seed_defaults().await?;
            let message = if seeded == 0 {
                "Catalog already has templates; nothing seeded.".to_string()
            } else {
                format!("Seeded {seeded} tree template(s).")
            };
            output(
                &TemplateActionOutput {
                    success: true,
                    message,
                    template: None,
                },
                json_mode,
            );
        }
    }

    Ok(())
}
