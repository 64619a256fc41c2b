//! Tree domain models.
//!
//! Templates are the admin-managed catalog a reward is drawn from. Owned trees are the
//! copies stored in a user's inventory once a focus session is completed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::reward::{RewardCandidate, Weighted};

/// A catalog entry ("tree type") managed by administrators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeTemplate {
    pub id: Uuid,
    #[serde(flatten)]
    pub reward: RewardCandidate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TreeTemplate {
    pub fn new(reward: RewardCandidate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            reward,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the catalog fields, keeping identity and creation time.
    pub fn apply(&mut self, reward: RewardCandidate) {
        self.reward = reward;
        self.updated_at = Utc::now();
    }
}

impl Weighted for TreeTemplate {
    fn weight(&self) -> f64 {
        self.reward.weight
    }
}

/// Editable fields of a tree, shared by inventory edits and template edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDetails {
    pub name: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
}

impl TreeDetails {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Tree name cannot be empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("Tree category cannot be empty".to_string());
        }
        Ok(())
    }
}

/// A tree stored in a user's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedTree {
    pub id: Uuid,
    pub owner: String,
    /// Template the tree was drawn from. `None` for the built-in fallback reward.
    pub template_id: Option<Uuid>,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub earned_at: DateTime<Utc>,
}

impl OwnedTree {
    /// Create an inventory copy of a reward for `owner`.
    pub fn earned(owner: impl Into<String>, reward: &RewardCandidate, template_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner: owner.into(),
            template_id,
            name: reward.name.clone(),
            category: reward.category.clone(),
            description: reward.description.clone(),
            image_url: reward.image_url.clone(),
            earned_at: Utc::now(),
        }
    }

    pub fn apply(&mut self, details: TreeDetails) {
        self.name = details.name;
        self.category = details.category;
        self.description = details.description;
        self.image_url = details.image_url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_serializes_flat() {
        let template = TreeTemplate::new(RewardCandidate::new("Arce", "Otoño", "d", "u", Some(5.0)));
        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(json["name"], "Arce");
        assert_eq!(json["weight"], 5.0);
        assert!(json.get("reward").is_none());
    }

    #[test]
    fn test_owned_tree_copies_reward() {
        let reward = RewardCandidate::new("Pino", "Bosque", "alto", "http://img", None);
        let template_id = Uuid::new_v4();
        let tree = OwnedTree::earned("ana", &reward, Some(template_id));
        assert_eq!(tree.owner, "ana");
        assert_eq!(tree.name, "Pino");
        assert_eq!(tree.template_id, Some(template_id));
    }

    #[test]
    fn test_apply_details() {
        let reward = RewardCandidate::new("Pino", "Bosque", "alto", "http://img", None);
        let mut tree = OwnedTree::earned("ana", &reward, None);
        tree.apply(TreeDetails {
            name: "Mi Pino".into(),
            category: "Jardín".into(),
            description: "renombrado".into(),
            image_url: "http://other".into(),
        });
        assert_eq!(tree.name, "Mi Pino");
        assert_eq!(tree.category, "Jardín");
    }

    #[test]
    fn test_details_validation() {
        let details = TreeDetails {
            name: String::new(),
            category: "Bosque".into(),
            description: String::new(),
            image_url: String::new(),
        };
        assert!(details.validate().is_err());
    }
}
