//! The admin-managed reward catalog.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{default_catalog, RewardCandidate, TreeTemplate, User};
use crate::domain::ports::TemplateRepository;

/// Who is changing the catalog.
#[derive(Debug, Clone, Copy)]
pub enum Actor<'a> {
    /// Local operator using the command line.
    Operator,
    /// A user authenticated by the gateway.
    User(&'a User),
}

impl Actor<'_> {
    fn require_admin(&self) -> DomainResult<()> {
        match self {
            Actor::Operator => Ok(()),
            Actor::User(user) if user.is_admin => Ok(()),
            Actor::User(user) => Err(DomainError::PermissionDenied(format!(
                "{} is not an administrator",
                user.username
            ))),
        }
    }
}

pub struct TemplateService<C: TemplateRepository> {
    templates: Arc<C>,
}

impl<C: TemplateRepository> TemplateService<C> {
    pub fn new(templates: Arc<C>) -> Self {
        Self { templates }
    }

    pub async fn list(&self, actor: Actor<'_>) -> DomainResult<Vec<TreeTemplate>> {
        actor.require_admin()?;
        self.templates.list().await
    }

    pub async fn create(&self, actor: Actor<'_>, reward: RewardCandidate) -> DomainResult<TreeTemplate> {
        actor.require_admin()?;
        reward.validate().map_err(DomainError::ValidationFailed)?;

        let template = TreeTemplate::new(reward);
        self.templates.create(&template).await?;
        info!(template_id = %template.id, name = %template.reward.name, "created tree template");
        Ok(template)
    }

    pub async fn update(
        &self,
        actor: Actor<'_>,
        id: Uuid,
        reward: RewardCandidate,
    ) -> DomainResult<TreeTemplate> {
        actor.require_admin()?;
        reward.validate().map_err(DomainError::ValidationFailed)?;

        let mut template = self
            .templates
            .get(id)
            .await?
            .ok_or(DomainError::TemplateNotFound(id))?;
        template.apply(reward);

        if !self.templates.update(&template).await? {
            return Err(DomainError::TemplateNotFound(id));
        }
        Ok(template)
    }

    pub async fn delete(&self, actor: Actor<'_>, id: Uuid) -> DomainResult<()> {
        actor.require_admin()?;
        if !self.templates.delete(id).await? {
            return Err(DomainError::TemplateNotFound(id));
        }
        info!(template_id = %id, "deleted tree template");
        Ok(())
    }

    /// Insert the built-in catalog when no templates exist.
    ///
    /// Returns how many templates were inserted.
    pub async fn seed_defaults(&self) -> DomainResult<usize> {
        if self.templates.count().await? > 0 {
            return Ok(0);
        }

        let catalog = default_catalog();
        for reward in &catalog {
            self.templates.create(&TreeTemplate::new(reward.clone())).await?;
        }
        info!(count = catalog.len(), "seeded default tree templates");
        Ok(catalog.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::{create_migrated_test_pool, SqliteTemplateRepository};

    async fn setup() -> TemplateService<SqliteTemplateRepository> {
        let pool = create_migrated_test_pool().await.unwrap();
        TemplateService::new(Arc::new(SqliteTemplateRepository::new(pool)))
    }

    fn admin() -> User {
        let mut user = User::new("root", None);
        user.is_admin = true;
        user
    }

    #[tokio::test]
    async fn test_non_admin_is_rejected() {
        let service = setup().await;
        let user = User::new("ana", None);
        let reward = RewardCandidate::new("Roble", "Bosque", "", "", None);

        assert!(matches!(
            service.list(Actor::User(&user)).await,
            Err(DomainError::PermissionDenied(_))
        ));
        assert!(matches!(
            service.create(Actor::User(&user), reward).await,
            Err(DomainError::PermissionDenied(_))
        ));
        assert!(matches!(
            service.delete(Actor::User(&user), Uuid::new_v4()).await,
            Err(DomainError::PermissionDenied(_))
        ));
    }

    #[tokio::test]
    async fn test_admin_crud() {
        let service = setup().await;
        let admin = admin();
        let created = service
            .create(Actor::User(&admin), RewardCandidate::new("Roble", "Bosque", "", "", None))
            .await
            .unwrap();
        assert_eq!(created.reward.weight, 20.0);

        let updated = service
            .update(
                Actor::User(&admin),
                created.id,
                RewardCandidate::new("Roble Viejo", "Bosque", "", "", Some(3.0)),
            )
            .await
            .unwrap();
        assert_eq!(updated.reward.name, "Roble Viejo");
        assert_eq!(updated.created_at, created.created_at);

        service.delete(Actor::Operator, created.id).await.unwrap();
        assert!(matches!(
            service.delete(Actor::Operator, created.id).await,
            Err(DomainError::TemplateNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_weight_rejected() {
        let service = setup().await;
        let reward = RewardCandidate::new("Roble", "Bosque", "", "", Some(-1.0));
        assert!(matches!(
            service.create(Actor::Operator, reward).await,
            Err(DomainError::ValidationFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_seed_defaults_only_when_empty() {
        let service = setup().await;
        assert_eq!(service.seed_defaults().await.unwrap(), 6);
        assert_eq!(service.seed_defaults().await.unwrap(), 0);
        assert_eq!(service.list(Actor::Operator).await.unwrap().len(), 6);
    }
}
