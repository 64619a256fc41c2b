//! Common test utilities for integration tests
//!
//! Provides shared fixtures used across multiple integration test files.

#![allow(dead_code)]

use std::sync::Arc;

use forest::adapters::http::AppState;
use forest::adapters::sqlite::{create_migrated_test_pool, SqliteUserRepository};
use forest::domain::models::{Config, User};
use forest::domain::ports::UserRepository;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Phrases long enough to survive normalisation.
pub fn sample_phrases() -> Vec<String> {
    [
        "El éxito es la suma de pequeños esfuerzos.",
        "No cuentes los días, haz que los días cuenten.",
        "Cada árbol grande empezó como una semilla.",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// A configuration whose phrase cache lives in `dir`.
pub fn test_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.phrases.cache_path = dir.path().join("phrases_cache.json").display().to_string();
    config.phrases.seed = sample_phrases();
    config.audio.urls = vec!["https://audio.example/bosque.mp3".to_string()];
    config
}

/// Register `username`, optionally as an administrator.
pub async fn add_user(pool: &SqlitePool, username: &str, admin: bool) -> User {
    let repo = SqliteUserRepository::new(pool.clone());
    let mut user = User::new(username, None);
    user.is_admin = admin;
    repo.create(&user).await.expect("Failed to create user");
    user
}

/// Application state over an in-memory database, plus the temp dir backing it.
pub async fn app_state() -> (Arc<AppState>, SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let pool = create_migrated_test_pool()
        .await
        .expect("Failed to create test pool");
    let state = AppState::new(pool.clone(), &test_config(&dir));
    (Arc::new(state), pool, dir)
}
