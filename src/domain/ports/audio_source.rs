//! Ambient audio port.

use async_trait::async_trait;

/// Supplies an ambient track URL for a focus session.
#[async_trait]
pub trait AudioSource: Send + Sync {
    /// A track URL, or `None` when the source has nothing to offer.
    async fn ambient_url(&self) -> Option<String>;
}
