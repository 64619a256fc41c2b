//! SQLite implementation of the UserRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::adapters::sqlite::{from_db_count, parse_datetime, to_db_count};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::User;
use crate::domain::ports::UserRepository;

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &User) -> DomainResult<()> {
        let pomodoros = to_db_count(user.pomodoros_completed, "pomodoros_completed")?;
        let minutes = to_db_count(user.total_focus_minutes, "total_focus_minutes")?;
        let result = sqlx::query(
            r#"INSERT INTO users (username, email, is_admin, pomodoros_completed, total_focus_minutes, created_at)
               VALUES (?, ?, ?, ?, ?, ?)"#
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.is_admin)
        .bind(pomodoros)
        .bind(minutes)
        .bind(user.created_at.to_rfc3339())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(DomainError::UserAlreadyExists(user.username.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get(&self, username: &str) -> DomainResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as("SELECT * FROM users ORDER BY username")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn set_admin(&self, username: &str, is_admin: bool) -> DomainResult<()> {
        let result = sqlx::query("UPDATE users SET is_admin = ? WHERE username = ?")
            .bind(is_admin)
            .bind(username)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(username.to_string()));
        }
        Ok(())
    }

    async fn record_completed_session(&self, username: &str, minutes: u64) -> DomainResult<()> {
        let minutes = to_db_count(minutes, "minutes")?;
        let result = sqlx::query(
            r#"UPDATE users
               SET pomodoros_completed = pomodoros_completed + 1,
                   total_focus_minutes = total_focus_minutes + ?
               WHERE username = ?"#
        )
        .bind(minutes)
        .bind(username)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(username.to_string()));
        }
        Ok(())
    }

    async fn set_stats(
        &self,
        username: &str,
        pomodoros_completed: u64,
        total_focus_minutes: u64,
    ) -> DomainResult<()> {
        let pomodoros = to_db_count(pomodoros_completed, "pomodoros_completed")?;
        let minutes = to_db_count(total_focus_minutes, "total_focus_minutes")?;
        let result = sqlx::query(
            "UPDATE users SET pomodoros_completed = ?, total_focus_minutes = ? WHERE username = ?"
        )
        .bind(pomodoros)
        .bind(minutes)
        .bind(username)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(username.to_string()));
        }
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    username: String,
    email: Option<String>,
    is_admin: bool,
    pomodoros_completed: i64,
    total_focus_minutes: i64,
    created_at: String,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            username: row.username,
            email: row.email,
            is_admin: row.is_admin,
            pomodoros_completed: from_db_count(row.pomodoros_completed, "pomodoros_completed")?,
            total_focus_minutes: from_db_count(row.total_focus_minutes, "total_focus_minutes")?,
            created_at: parse_datetime(&row.created_at)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::create_migrated_test_pool;

    async fn setup_test_repo() -> SqliteUserRepository {
        let pool = create_migrated_test_pool().await.unwrap();
        SqliteUserRepository::new(pool)
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let repo = setup_test_repo().await;
        let user = User::new("ana", Some("ana@example.com".to_string()));
        repo.create(&user).await.unwrap();

        let stored = repo.get("ana").await.unwrap().unwrap();
        assert_eq!(stored.email.as_deref(), Some("ana@example.com"));
        assert!(!stored.is_admin);
        assert!(repo.get("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let repo = setup_test_repo().await;
        repo.create(&User::new("ana", None)).await.unwrap();
        let err = repo.create(&User::new("ana", None)).await.unwrap_err();
        assert!(matches!(err, DomainError::UserAlreadyExists(name) if name == "ana"));
    }

    #[tokio::test]
    async fn test_record_completed_session_increments() {
        let repo = setup_test_repo().await;
        repo.create(&User::new("ana", None)).await.unwrap();
        repo.record_completed_session("ana", 25).await.unwrap();
        repo.record_completed_session("ana", 50).await.unwrap();

        let user = repo.get("ana").await.unwrap().unwrap();
        assert_eq!(user.pomodoros_completed, 2);
        assert_eq!(user.total_focus_minutes, 75);
    }

    #[tokio::test]
    async fn test_updates_on_missing_user_fail() {
        let repo = setup_test_repo().await;
        assert!(matches!(
            repo.record_completed_session("ghost", 25).await,
            Err(DomainError::UserNotFound(_))
        ));
        assert!(matches!(repo.set_admin("ghost", true).await, Err(DomainError::UserNotFound(_))));
        assert!(matches!(repo.set_stats("ghost", 1, 1).await, Err(DomainError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_set_admin_and_stats() {
        let repo = setup_test_repo().await;
        repo.create(&User::new("ana", None)).await.unwrap();
        repo.set_admin("ana", true).await.unwrap();
        repo.set_stats("ana", 4, 100).await.unwrap();

        let user = repo.get("ana").await.unwrap().unwrap();
        assert!(user.is_admin);
        assert_eq!(user.pomodoros_completed, 4);
        assert_eq!(user.total_focus_minutes, 100);
    }

    #[tokio::test]
    async fn test_oversized_counters_rejected() {
        let repo = setup_test_repo().await;
        repo.create(&User::new("ana", None)).await.unwrap();
        repo.set_stats("ana", 3, 75).await.unwrap();

        let err = repo.set_stats("ana", u64::MAX, 10).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationFailed(_)));
        let err = repo.record_completed_session("ana", u64::MAX).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationFailed(_)));

        let user = repo.get("ana").await.unwrap().unwrap();
        assert_eq!(user.pomodoros_completed, 3);
        assert_eq!(user.total_focus_minutes, 75);
    }

    #[tokio::test]
    async fn test_list_sorted() {
        let repo = setup_test_repo().await;
        repo.create(&User::new("zoe", None)).await.unwrap();
        repo.create(&User::new("ana", None)).await.unwrap();
        let names: Vec<_> = repo.list().await.unwrap().into_iter().map(|u| u.username).collect();
        assert_eq!(names, vec!["ana", "zoe"]);
    }
}
