//! Phrase cache port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Durable storage for the daily phrase pool.
#[async_trait]
pub trait PhraseStore: Send + Sync {
    /// Load cached phrases.
    ///
    /// With `require_today` set, a cache written on another day counts as absent.
    /// Returns `Ok(None)` when nothing usable is stored.
    async fn load(&self, require_today: bool) -> DomainResult<Option<Vec<String>>>;

    /// Replace the cached phrases, stamping them with today's date.
    async fn save(&self, phrases: &[String]) -> DomainResult<()>;
}
