//! JSON file implementation of the PhraseStore.
//!
//! The file holds `{"date": "YYYY-MM-DD", "phrases": [...]}`. Reads are best effort:
//! a missing, unreadable or corrupt file is logged and treated as an empty cache.

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::PhraseCache;
use crate::domain::ports::PhraseStore;

pub struct JsonPhraseCache {
    path: PathBuf,
}

impl JsonPhraseCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole cache record, if a readable one exists.
    pub async fn read(&self) -> Option<PhraseCache> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read phrase cache");
                return None;
            }
        };

        match serde_json::from_str::<PhraseCache>(&raw) {
            Ok(cache) => Some(cache),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring corrupt phrase cache");
                None
            }
        }
    }

    /// Write `phrases` stamped with an explicit date.
    pub async fn write_for(&self, date: NaiveDate, phrases: &[String]) -> DomainResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let cache = PhraseCache::new(date, phrases.to_vec());
        let body = serde_json::to_string_pretty(&cache)?;
        fs::write(&self.path, body).await?;
        debug!(path = %self.path.display(), count = phrases.len(), %date, "phrase cache written");
        Ok(())
    }
}

#[async_trait]
impl PhraseStore for JsonPhraseCache {
    async fn load(&self, require_today: bool) -> DomainResult<Option<Vec<String>>> {
        let Some(cache) = self.read().await else {
            return Ok(None);
        };

        if require_today && !cache.is_for(today()) {
            debug!(cached = %cache.date, "phrase cache is stale");
            return Ok(None);
        }

        Ok(Some(cache.phrases))
    }

    async fn save(&self, phrases: &[String]) -> DomainResult<()> {
        self.write_for(today(), phrases).await
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
