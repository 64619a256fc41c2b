//! Reward candidates: the trees a completed focus session can grant.

use serde::{Deserialize, Deserializer, Serialize};

/// Weight assigned to a candidate that carries no explicit weight.
pub const DEFAULT_WEIGHT: f64 = 20.0;

/// Anything that can take part in a weighted draw.
pub trait Weighted {
    /// Relative selection weight. Already normalised; never `None`.
    fn weight(&self) -> f64;
}

/// A selectable prize item with a relative selection weight.
///
/// The weight is normalised on construction and on deserialisation:
/// a missing or `null` weight becomes [`DEFAULT_WEIGHT`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardCandidate {
    pub name: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    #[serde(default = "default_weight", deserialize_with = "deserialize_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

fn deserialize_weight<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_WEIGHT))
}

impl RewardCandidate {
    /// Create a candidate. `weight` of `None` is normalised to [`DEFAULT_WEIGHT`].
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        weight: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            description: description.into(),
            image_url: image_url.into(),
            weight: weight.unwrap_or(DEFAULT_WEIGHT),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Validate a candidate before it is persisted as a template.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Tree name cannot be empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("Tree category cannot be empty".to_string());
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(format!("Weight must be a positive number, got {}", self.weight));
        }
        Ok(())
    }
}

impl Weighted for RewardCandidate {
    fn weight(&self) -> f64 {
        self.weight
    }
}

/// The built-in catalog used to seed an empty template table.
pub fn default_catalog() -> Vec<RewardCandidate> {
    vec![
        RewardCandidate::new(
            "Roble",
            "Bosque",
            "Un majestuoso roble, símbolo de fuerza y perseverancia.",
            "https://cdn.pixabay.com/photo/2015/03/07/10/00/oak-tree-662500_640.jpg",
            None,
        ),
        RewardCandidate::new(
            "Pino",
            "Bosque",
            "Un alto pino verde, representa la longevidad y sabiduría.",
            "https://cdn.pixabay.com/photo/2016/02/13/12/26/tree-1197911_640.jpg",
            None,
        ),
        RewardCandidate::new(
            "Cerezo",
            "Floración",
            "Un hermoso cerezo en flor, símbolo de la belleza efímera y la renovación.",
            "https://cdn.pixabay.com/photo/2018/04/27/09/23/cherry-blossoms-3354934_640.jpg",
            None,
        ),
        RewardCandidate::new(
            "Arce",
            "Otoño",
            "Un arce con hojas rojas, perfecto para representar el cambio y adaptación.",
            "https://cdn.pixabay.com/photo/2015/11/07/11/25/autumn-1031286_640.jpg",
            None,
        ),
        RewardCandidate::new(
            "Sauce Llorón",
            "Agua",
            "Un sauce llorón que crece junto al agua, símbolo de flexibilidad y resiliencia.",
            "https://cdn.pixabay.com/photo/2013/05/07/13/40/weeping-willow-109287_640.jpg",
            None,
        ),
        RewardCandidate::new(
            "Secuoya",
            "Antiguo",
            "Una imponente secuoya, representa grandeza y resistencia.",
            "https://cdn.pixabay.com/photo/2017/07/05/15/30/sequoia-2474953_640.jpg",
            None,
        ),
    ]
}

/// Reward granted when no catalog is available at all.
pub fn fallback_reward() -> RewardCandidate {
    RewardCandidate::new(
        "Roble Predeterminado",
        "Bosque",
        "Un árbol predeterminado cuando no hay árboles en la base de datos.",
        "https://cdn.pixabay.com/photo/2015/03/07/10/00/oak-tree-662500_640.jpg",
        None,
    )
}
