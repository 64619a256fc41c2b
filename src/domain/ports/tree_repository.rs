//! Inventory (owned tree) repository port.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::models::OwnedTree;

/// Repository interface for the trees users have earned.
#[async_trait]
pub trait TreeRepository: Send + Sync {
    /// Add a tree to its owner's inventory.
    async fn add(&self, tree: &OwnedTree) -> DomainResult<()>;

    /// Add a tree earned by a completed session and bump its owner's counters.
    ///
    /// Both writes commit together or not at all.
    async fn grant(&self, tree: &OwnedTree, minutes: u64) -> DomainResult<()>;

    /// Get a tree by ID, scoped to its owner.
    async fn get(&self, owner: &str, id: Uuid) -> DomainResult<Option<OwnedTree>>;

    /// List an owner's trees, oldest first.
    async fn list_for_owner(&self, owner: &str) -> DomainResult<Vec<OwnedTree>>;

    /// Persist edited fields. Returns `false` when no such tree exists for the owner.
    async fn update(&self, tree: &OwnedTree) -> DomainResult<bool>;

    /// Remove a tree. Returns `false` when no such tree exists for the owner.
    async fn delete(&self, owner: &str, id: Uuid) -> DomainResult<bool>;

    /// Count an owner's trees.
    async fn count_for_owner(&self, owner: &str) -> DomainResult<u64>;
}
