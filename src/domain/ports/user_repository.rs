//! User repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::User;

/// Repository interface for user accounts and their counters.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user.
    ///
    /// # Errors
    /// `UserAlreadyExists` when the username is taken.
    async fn create(&self, user: &User) -> DomainResult<()>;

    /// Get a user by username.
    async fn get(&self, username: &str) -> DomainResult<Option<User>>;

    /// List all users ordered by username.
    async fn list(&self) -> DomainResult<Vec<User>>;

    /// Grant or revoke administrator rights.
    async fn set_admin(&self, username: &str, is_admin: bool) -> DomainResult<()>;

    /// Atomically add one completed session and `minutes` of focus time.
    async fn record_completed_session(&self, username: &str, minutes: u64) -> DomainResult<()>;

    /// Overwrite both counters.
    async fn set_stats(
        &self,
        username: &str,
        pomodoros_completed: u64,
        total_focus_minutes: u64,
    ) -> DomainResult<()>;
}
