//! Motivational phrase CLI commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::cache::JsonPhraseCache;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::services::{NoImmediateRepeatPicker, PhraseService, PHRASE_FALLBACK};

#[derive(Args, Debug)]
pub struct PhraseArgs {
    #[command(subcommand)]
    pub command: PhraseCommands,
}

#[derive(Subcommand, Debug)]
pub enum PhraseCommands {
    /// Show a phrase of the day, refreshing a stale cache
    Show,
    /// Draw phrases the way the API does, avoiding recent repeats
    Next {
        /// How many phrases to draw
        #[arg(short, long, default_value = "1")]
        count: usize,
    },
    /// Replace the cached phrases from a file
    Import {
        /// A JSON array of strings, or plain text with one phrase per line
        file: PathBuf,
    },
}

#[derive(Debug, serde::Serialize)]
pub struct PhrasesOutput {
    pub phrases: Vec<String>,
}

impl CommandOutput for PhrasesOutput {
    fn to_human(&self) -> String {
        self.phrases.join("\n")
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ImportOutput {
    pub success: bool,
    pub imported: usize,
    pub cache_path: PathBuf,
}

impl CommandOutput for ImportOutput {
    fn to_human(&self) -> String {
        format!(
            "Imported {} phrase(s) into {}",
            self.imported,
            self.cache_path.display()
        )
    }
}

pub async fn execute(args: PhraseArgs, config: &Config, json_mode: bool) -> Result<()> {
    let store = Arc::new(JsonPhraseCache::new(&config.phrases.cache_path));
    let picker = Arc::new(NoImmediateRepeatPicker::with_capacity(
        config.phrases.history_capacity,
    ));
    let service = PhraseService::new(store.clone(), config.phrases.seed.clone()).with_picker(picker);

    match args.command {
        PhraseCommands::Show => {
            let phrase = service
                .phrase_of_the_day()
                .await
                .unwrap_or_else(|| PHRASE_FALLBACK.to_string());
            output(&PhrasesOutput { phrases: vec![phrase] }, json_mode);
        }
        PhraseCommands::Next { count } => {
            let mut phrases = Vec::with_capacity(count);
            for _ in 0..count {
                let phrase = service
                    .next_phrase()
                    .await
                    .unwrap_or_else(|| PHRASE_FALLBACK.to_string());
                phrases.push(phrase);
            }
            output(&PhrasesOutput { phrases }, json_mode);
        }
        PhraseCommands::Import { file } => {
            let raw = read_phrase_file(&file).await?;
            let imported = service
                .import(raw)
                .await
                .with_context(|| format!("Failed to import phrases from {}", file.display()))?;
            let out = ImportOutput {
                success: true,
                imported,
                cache_path: store.path().to_path_buf(),
            };
            output(&out, json_mode);
        }
    }

    Ok(())
}

/// Read phrases from a JSON array or from plain lines.
async fn read_phrase_file(path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if content.trim_start().starts_with('[') {
        return serde_json::from_str(&content)
            .with_context(|| format!("{} is not a JSON array of strings", path.display()));
    }
    Ok(content.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_plain_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("phrases.txt");
        tokio::fs::write(&path, "Primera frase del archivo.\n\nSegunda frase del archivo.\n")
            .await
            .unwrap();

        let phrases = read_phrase_file(&path).await.unwrap();
        assert_eq!(phrases.len(), 3);
        assert_eq!(phrases[2], "Segunda frase del archivo.");
    }

    #[tokio::test]
    async fn test_read_json_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("phrases.json");
        tokio::fs::write(&path, r#"["Una frase en JSON bastante larga."]"#)
            .await
            .unwrap();

        let phrases = read_phrase_file(&path).await.unwrap();
        assert_eq!(phrases, vec!["Una frase en JSON bastante larga."]);
    }

    #[tokio::test]
    async fn test_import_command_writes_cache() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("in.txt");
        tokio::fs::write(&file, "Importada desde la línea de comandos.\ncorta\n")
            .await
            .unwrap();

        let mut config = Config::default();
        config.phrases.cache_path = dir.path().join("cache.json").display().to_string();

        let args = PhraseArgs {
            command: PhraseCommands::Import { file },
        };
        execute(args, &config, true).await.unwrap();

        let cached = JsonPhraseCache::new(&config.phrases.cache_path).read().await.unwrap();
        assert_eq!(cached.phrases, vec!["Importada desde la línea de comandos."]);
    }
}
