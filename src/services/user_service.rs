//! User registration, roles and focus statistics.

use std::sync::Arc;

use tracing::info;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{User, UserStats};
use crate::domain::ports::{TreeRepository, UserRepository};

pub struct UserService<U: UserRepository, T: TreeRepository> {
    users: Arc<U>,
    trees: Arc<T>,
}

impl<U: UserRepository, T: TreeRepository> UserService<U, T> {
    pub fn new(users: Arc<U>, trees: Arc<T>) -> Self {
        Self { users, trees }
    }

    /// Register a new user.
    pub async fn register(&self, username: &str, email: Option<String>) -> DomainResult<User> {
        let user = User::new(username, email);
        user.validate().map_err(DomainError::ValidationFailed)?;
        self.users.create(&user).await?;
        info!(username = %user.username, "registered user");
        Ok(user)
    }

    pub async fn get(&self, username: &str) -> DomainResult<User> {
        self.users
            .get(username)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()))
    }

    pub async fn list(&self) -> DomainResult<Vec<User>> {
        self.users.list().await
    }

    /// Grant or revoke administrator rights.
    pub async fn set_admin(&self, username: &str, is_admin: bool) -> DomainResult<User> {
        self.users.set_admin(username, is_admin).await?;
        info!(username, is_admin, "changed administrator rights");
        self.get(username).await
    }

    /// Counters for a user, with the tree total taken from the inventory.
    pub async fn stats(&self, username: &str) -> DomainResult<UserStats> {
        let user = self.get(username).await?;
        let total_trees = self.trees.count_for_owner(username).await?;
        Ok(UserStats {
            total_trees,
            pomodoros_completed: user.pomodoros_completed,
            total_focus_minutes: user.total_focus_minutes,
        })
    }

    /// Overwrite both counters and return the refreshed statistics.
    pub async fn set_stats(
        &self,
        username: &str,
        pomodoros_completed: u64,
        total_focus_minutes: u64,
    ) -> DomainResult<UserStats> {
        self.users
            .set_stats(username, pomodoros_completed, total_focus_minutes)
            .await?;
        self.stats(username).await
    }
}
