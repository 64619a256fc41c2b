//! Pomodoro Forest - a focus timer backend that rewards finished sessions with trees.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, errors and port traits
//! - **Service Layer** (`services`): weighted tree selection, no-repeat phrase picking
//!   and the use cases built on them
//! - **Adapters** (`adapters`): SQLite repositories, the phrase cache file, audio and
//!   the axum HTTP API
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```
//! use forest::domain::models::default_catalog;
//! use forest::services::WeightedTreeSelector;
//!
//! let catalog = default_catalog();
//! let tree = WeightedTreeSelector::new().select_random(&catalog).unwrap();
//! assert!(catalog.iter().any(|c| c.name == tree.name));
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult, SelectionError};
pub use domain::models::{
    Config, OwnedTree, RewardCandidate, TreeTemplate, User, UserStats, Weighted,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{NoImmediateRepeatPicker, PhraseHistory, WeightedTreeSelector};
