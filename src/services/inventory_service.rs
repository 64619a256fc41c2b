//! A user's tree inventory.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{OwnedTree, TreeDetails};
use crate::domain::ports::TreeRepository;

pub struct InventoryService<T: TreeRepository> {
    trees: Arc<T>,
}

impl<T: TreeRepository> InventoryService<T> {
    pub fn new(trees: Arc<T>) -> Self {
        Self { trees }
    }

    /// Trees owned by `owner`, oldest first.
    pub async fn list(&self, owner: &str) -> DomainResult<Vec<OwnedTree>> {
        self.trees.list_for_owner(owner).await
    }

    /// Edit one of `owner`'s trees.
    ///
    /// Trees belonging to someone else are reported as missing.
    pub async fn update(&self, owner: &str, id: Uuid, details: TreeDetails) -> DomainResult<OwnedTree> {
        details.validate().map_err(DomainError::ValidationFailed)?;

        let mut tree = self
            .trees
            .get(owner, id)
            .await?
            .ok_or(DomainError::TreeNotFound(id))?;
        tree.apply(details);

        if !self.trees.update(&tree).await? {
            return Err(DomainError::TreeNotFound(id));
        }
        Ok(tree)
    }

    pub async fn delete(&self, owner: &str, id: Uuid) -> DomainResult<()> {
        if !self.trees.delete(owner, id).await? {
            return Err(DomainError::TreeNotFound(id));
        }
        info!(owner, tree_id = %id, "removed tree from inventory");
        Ok(())
    }
}
