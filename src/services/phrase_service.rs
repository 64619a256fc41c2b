//! Motivational phrases: the daily cache, its refill and the no-repeat picker.

use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::normalize_phrases;
use crate::domain::ports::PhraseStore;
use crate::services::phrase_picker::NoImmediateRepeatPicker;

/// Shown when a session starts and no phrase is available.
pub const START_FALLBACK_PHRASE: &str = "¡El tiempo es oro! Aprovéchalo al máximo.";

/// Shown when a phrase is requested and none is available.
pub const PHRASE_FALLBACK: &str = "¡Cada minuto cuenta en tu camino hacia el éxito!";

pub struct PhraseService<S: PhraseStore> {
    store: Arc<S>,
    seed: Vec<String>,
    picker: Arc<NoImmediateRepeatPicker>,
}

impl<S: PhraseStore> PhraseService<S> {
    pub fn new(store: Arc<S>, seed: Vec<String>) -> Self {
        Self {
            store,
            seed: normalize_phrases(seed),
            picker: Arc::new(NoImmediateRepeatPicker::new()),
        }
    }

    /// Share an existing picker (and its history) with this service.
    pub fn with_picker(mut self, picker: Arc<NoImmediateRepeatPicker>) -> Self {
        self.picker = picker;
        self
    }

    pub fn picker(&self) -> &NoImmediateRepeatPicker {
        &self.picker
    }

    /// A random phrase from today's cache.
    ///
    /// A missing or stale cache is refilled first. If the store fails, whatever is cached
    /// is used regardless of its date. `None` means nothing is available at all.
    pub async fn phrase_of_the_day(&self) -> Option<String> {
        match self.store.load(true).await {
            Ok(Some(pool)) if !pool.is_empty() => return choose_one(&pool),
            Ok(_) => match self.refill().await {
                Ok(Some(pool)) => return choose_one(&pool),
                Ok(None) => return None,
                Err(e) => warn!(error = %e, "failed to refill phrase cache"),
            },
            Err(e) => warn!(error = %e, "failed to read today's phrase cache"),
        }

        match self.store.load(false).await {
            Ok(Some(pool)) => choose_one(&pool),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "phrase cache unavailable");
                None
            }
        }
    }

    /// The next phrase from the cached pool, avoiding recently returned ones.
    pub async fn next_phrase(&self) -> Option<String> {
        let pool = match self.current_pool().await {
            Ok(pool) => pool,
            Err(e) => {
                warn!(error = %e, "failed to load phrase pool");
                return None;
            }
        };

        match self.picker.pick(&pool) {
            Ok(phrase) => Some(phrase),
            Err(e) => {
                debug!(error = %e, "no phrase to pick");
                None
            }
        }
    }

    /// Cached phrases regardless of their date, refilling when nothing is cached.
    pub async fn current_pool(&self) -> DomainResult<Vec<String>> {
        match self.store.load(false).await? {
            Some(pool) if !pool.is_empty() => Ok(pool),
            _ => Ok(self.refill().await?.unwrap_or_default()),
        }
    }

    /// Replace the cached pool with operator supplied phrases.
    ///
    /// Returns how many phrases were kept after normalisation.
    pub async fn import<I, T>(&self, raw: I) -> DomainResult<usize>
    where
        I: IntoIterator<Item = T> + Send,
        T: AsRef<str>,
    {
        let phrases = normalize_phrases(raw);
        if phrases.is_empty() {
            return Err(DomainError::ValidationFailed(
                "no usable phrases to import".to_string(),
            ));
        }
        self.store.save(&phrases).await?;
        info!(count = phrases.len(), "imported motivational phrases");
        Ok(phrases.len())
    }

    /// Re-stamp the cache for today, from what is cached or from the seed phrases.
    async fn refill(&self) -> DomainResult<Option<Vec<String>>> {
        let pool = match self.store.load(false).await {
            Ok(Some(cached)) if !cached.is_empty() => cached,
            _ => self.seed.clone(),
        };

        if pool.is_empty() {
            return Ok(None);
        }

        self.store.save(&pool).await?;
        debug!(count = pool.len(), "phrase cache refilled for today");
        Ok(Some(pool))
    }
}

fn choose_one(pool: &[String]) -> Option<String> {
    pool.choose(&mut rand::thread_rng()).cloned()
}
