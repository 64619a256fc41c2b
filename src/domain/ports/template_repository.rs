//! Tree template repository port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::TreeTemplate;

/// Repository interface for the reward catalog.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn create(&self, template: &TreeTemplate) -> DomainResult<()>;

    async fn get(&self, id: Uuid) -> DomainResult<Option<TreeTemplate>>;

    /// List templates in insertion order. Selection walks this order.
    async fn list(&self) -> DomainResult<Vec<TreeTemplate>>;

    /// Returns `false` when the template does not exist.
    async fn update(&self, template: &TreeTemplate) -> DomainResult<bool>;

    /// Returns `false` when the template does not exist.
    async fn delete(&self, id: Uuid) -> DomainResult<bool>;

    async fn count(&self) -> DomainResult<u64>;
}
