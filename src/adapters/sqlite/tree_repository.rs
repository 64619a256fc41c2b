//! SQLite implementation of the TreeRepository.

use async_trait::async_trait;
use sqlx::query::Query;
use sqlx::{Sqlite, SqlitePool};
use uuid::Uuid;

use crate::adapters::sqlite::{from_db_count, parse_datetime, parse_optional_uuid, parse_uuid, to_db_count};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::OwnedTree;
use crate::domain::ports::TreeRepository;

#[derive(Clone)]
pub struct SqliteTreeRepository {
    pool: SqlitePool,
}

impl SqliteTreeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TreeRepository for SqliteTreeRepository {
    async fn add(&self, tree: &OwnedTree) -> DomainResult<()> {
        insert_tree(tree)
            .execute(&self.pool)
            .await
            .map_err(|e| insert_error(e, tree))?;
        Ok(())
    }

    async fn grant(&self, tree: &OwnedTree, minutes: u64) -> DomainResult<()> {
        let minutes = to_db_count(minutes, "minutes")?;
        let mut tx = self.pool.begin().await?;

        insert_tree(tree)
            .execute(&mut *tx)
            .await
            .map_err(|e| insert_error(e, tree))?;

        let result = sqlx::query(
            r#"UPDATE users
               SET pomodoros_completed = pomodoros_completed + 1,
                   total_focus_minutes = total_focus_minutes + ?
               WHERE username = ?"#
        )
        .bind(minutes)
        .bind(&tree.owner)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(tree.owner.clone()));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn get(&self, owner: &str, id: Uuid) -> DomainResult<Option<OwnedTree>> {
        let row: Option<OwnedTreeRow> =
            sqlx::query_as("SELECT * FROM owned_trees WHERE id = ? AND owner = ?")
                .bind(id.to_string())
                .bind(owner)
                .fetch_optional(&self.pool)
                .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn list_for_owner(&self, owner: &str) -> DomainResult<Vec<OwnedTree>> {
        let rows: Vec<OwnedTreeRow> =
            sqlx::query_as("SELECT * FROM owned_trees WHERE owner = ? ORDER BY earned_at, rowid")
                .bind(owner)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn update(&self, tree: &OwnedTree) -> DomainResult<bool> {
        let result = sqlx::query(
            r#"UPDATE owned_trees SET name = ?, category = ?, description = ?, image_url = ?
               WHERE id = ? AND owner = ?"#
        )
        .bind(&tree.name)
        .bind(&tree.category)
        .bind(&tree.description)
        .bind(&tree.image_url)
        .bind(tree.id.to_string())
        .bind(&tree.owner)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, owner: &str, id: Uuid) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM owned_trees WHERE id = ? AND owner = ?")
            .bind(id.to_string())
            .bind(owner)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_for_owner(&self, owner: &str) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM owned_trees WHERE owner = ?")
            .bind(owner)
            .fetch_one(&self.pool)
            .await?;

        from_db_count(count, "count")
    }
}

fn insert_tree(tree: &OwnedTree) -> Query<'_, Sqlite, <Sqlite as sqlx::Database>::Arguments<'_>> {
    sqlx::query(
        r#"INSERT INTO owned_trees (id, owner, template_id, name, category, description, image_url, earned_at)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#
    )
    .bind(tree.id.to_string())
    .bind(&tree.owner)
    .bind(tree.template_id.map(|id| id.to_string()))
    .bind(&tree.name)
    .bind(&tree.category)
    .bind(&tree.description)
    .bind(&tree.image_url)
    .bind(tree.earned_at.to_rfc3339())
}

fn insert_error(err: sqlx::Error, tree: &OwnedTree) -> DomainError {
    match err {
        sqlx::Error::Database(e) if e.is_foreign_key_violation() => {
            DomainError::UserNotFound(tree.owner.clone())
        }
        e => e.into(),
    }
}

#[derive(sqlx::FromRow)]
struct OwnedTreeRow {
    id: String,
    owner: String,
    template_id: Option<String>,
    name: String,
    category: String,
    description: String,
    image_url: String,
    earned_at: String,
}

impl TryFrom<OwnedTreeRow> for OwnedTree {
    type Error = DomainError;

    fn try_from(row: OwnedTreeRow) -> Result<Self, Self::Error> {
        Ok(OwnedTree {
            id: parse_uuid(&row.id)?,
            owner: row.owner,
            template_id: parse_optional_uuid(row.template_id)?,
            name: row.name,
            category: row.category,
            description: row.description,
            image_url: row.image_url,
            earned_at: parse_datetime(&row.earned_at)?,
        })
    }
}
