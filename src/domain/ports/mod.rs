//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that infrastructure adapters must implement:
//! - UserRepository: user accounts and focus counters
//! - TreeRepository: per-user tree inventories
//! - TemplateRepository: the admin-managed reward catalog
//! - PhraseStore: the daily motivational phrase cache
//! - AudioSource: ambient tracks for focus sessions

pub mod audio_source;
pub mod phrase_store;
pub mod template_repository;
pub mod tree_repository;
pub mod user_repository;

pub use audio_source::AudioSource;
pub use phrase_store::PhraseStore;
pub use template_repository::TemplateRepository;
pub use tree_repository::TreeRepository;
pub use user_repository::UserRepository;
