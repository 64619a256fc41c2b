//! SQLite implementation of the TemplateRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::adapters::sqlite::{from_db_count, parse_datetime, parse_uuid};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{RewardCandidate, TreeTemplate};
use crate::domain::ports::TemplateRepository;

#[derive(Clone)]
pub struct SqliteTemplateRepository {
    pool: SqlitePool,
}

impl SqliteTemplateRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateRepository for SqliteTemplateRepository {
    async fn create(&self, template: &TreeTemplate) -> DomainResult<()> {
        sqlx::query(
            r#"INSERT INTO tree_templates (id, name, category, description, image_url, weight, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#
        )
        .bind(template.id.to_string())
        .bind(&template.reward.name)
        .bind(&template.reward.category)
        .bind(&template.reward.description)
        .bind(&template.reward.image_url)
        .bind(template.reward.weight)
        .bind(template.created_at.to_rfc3339())
        .bind(template.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, id: Uuid) -> DomainResult<Option<TreeTemplate>> {
        let row: Option<TemplateRow> = sqlx::query_as("SELECT * FROM tree_templates WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<TreeTemplate>> {
        let rows: Vec<TemplateRow> = sqlx::query_as("SELECT * FROM tree_templates ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn update(&self, template: &TreeTemplate) -> DomainResult<bool> {
        let result = sqlx::query(
            r#"UPDATE tree_templates
               SET name = ?, category = ?, description = ?, image_url = ?, weight = ?, updated_at = ?
               WHERE id = ?"#
        )
        .bind(&template.reward.name)
        .bind(&template.reward.category)
        .bind(&template.reward.description)
        .bind(&template.reward.image_url)
        .bind(template.reward.weight)
        .bind(template.updated_at.to_rfc3339())
        .bind(template.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM tree_templates WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tree_templates")
            .fetch_one(&self.pool)
            .await?;

        from_db_count(count, "count")
    }
}

#[derive(sqlx::FromRow)]
struct TemplateRow {
    id: String,
    name: String,
    category: String,
    description: String,
    image_url: String,
    weight: f64,
    created_at: String,
    updated_at: String,
}

impl TryFrom<TemplateRow> for TreeTemplate {
    type Error = DomainError;

    fn try_from(row: TemplateRow) -> Result<Self, Self::Error> {
        Ok(TreeTemplate {
            id: parse_uuid(&row.id)?,
            reward: RewardCandidate::new(
                row.name,
                row.category,
                row.description,
                row.image_url,
                Some(row.weight),
            ),
            created_at: parse_datetime(&row.created_at)?,
            updated_at: parse_datetime(&row.updated_at)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::{create_migrated_test_pool, SqliteTreeRepository, SqliteUserRepository};
    use crate::domain::models::{default_catalog, OwnedTree, User};
    use crate::domain::ports::{TreeRepository, UserRepository};

    async fn setup_test_repo() -> SqliteTemplateRepository {
        let pool = create_migrated_test_pool().await.unwrap();
        SqliteTemplateRepository::new(pool)
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = setup_test_repo().await;
        for reward in default_catalog() {
            repo.create(&TreeTemplate::new(reward)).await.unwrap();
        }

        let names: Vec<_> = repo.list().await.unwrap().into_iter().map(|t| t.reward.name).collect();
        let expected: Vec<_> = default_catalog().into_iter().map(|r| r.name).collect();
        assert_eq!(names, expected);
        assert_eq!(repo.count().await.unwrap(), 6);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = setup_test_repo().await;
        let mut template = TreeTemplate::new(RewardCandidate::new("Arce", "Otoño", "", "", Some(5.0)));
        repo.create(&template).await.unwrap();

        template.apply(RewardCandidate::new("Arce Rojo", "Otoño", "rojo", "", Some(7.5)));
        assert!(repo.update(&template).await.unwrap());
        let stored = repo.get(template.id).await.unwrap().unwrap();
        assert_eq!(stored.reward.name, "Arce Rojo");
        assert_eq!(stored.reward.weight, 7.5);

        assert!(repo.delete(template.id).await.unwrap());
        assert!(!repo.delete(template.id).await.unwrap());
        assert!(repo.get(template.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_non_positive_weight_rejected_by_schema() {
        let repo = setup_test_repo().await;
        let template = TreeTemplate::new(RewardCandidate::new("Roble", "Bosque", "", "", Some(0.0)));
        let err = repo.create(&template).await.unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn test_deleting_template_keeps_owned_trees() {
        let pool = create_migrated_test_pool().await.unwrap();
        let templates = SqliteTemplateRepository::new(pool.clone());
        let trees = SqliteTreeRepository::new(pool.clone());
        SqliteUserRepository::new(pool).create(&User::new("ana", None)).await.unwrap();

        let template = TreeTemplate::new(RewardCandidate::new("Cerezo", "Floración", "", "", None));
        templates.create(&template).await.unwrap();
        let tree = OwnedTree::earned("ana", &template.reward, Some(template.id));
        trees.add(&tree).await.unwrap();

        assert!(templates.delete(template.id).await.unwrap());
        let kept = trees.get("ana", tree.id).await.unwrap().unwrap();
        assert_eq!(kept.name, "Cerezo");
        assert_eq!(kept.template_id, None);
    }
}
