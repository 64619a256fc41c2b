//! End-to-end focus session flow over the service layer.

mod common;

use std::collections::HashSet;

use forest::adapters::sqlite::SqliteTemplateRepository;
use forest::domain::errors::DomainError;
use forest::domain::models::{default_catalog, RewardCandidate, TreeDetails, TreeTemplate};
use forest::domain::ports::TemplateRepository;
use forest::services::{Actor, COMPLETION_MESSAGE};

#[tokio::test]
async fn test_full_session_grows_inventory() {
    let (state, pool, _dir) = common::app_state().await;
    common::add_user(&pool, "ana", false).await;

    let session = state.pomodoro.start("ana", None).await.unwrap();
    assert_eq!(session.duration, 25);
    assert_eq!(session.audio_url, "https://audio.example/bosque.mp3");
    assert!(common::sample_phrases().contains(&session.motivational_phrase));

    let reward = state.pomodoro.complete("ana", None).await.unwrap();
    assert_eq!(reward.message, COMPLETION_MESSAGE);

    let trees = state.inventory.list("ana").await.unwrap();
    assert_eq!(trees.len(), 1);
    assert_eq!(trees[0].id, reward.tree.id);

    let stats = state.users.stats("ana").await.unwrap();
    assert_eq!(stats.total_trees, 1);
    assert_eq!(stats.pomodoros_completed, 1);
    assert_eq!(stats.total_focus_minutes, 25);
}

#[tokio::test]
async fn test_rewards_follow_the_catalog() {
    let (state, pool, _dir) = common::app_state().await;
    common::add_user(&pool, "ana", false).await;

    let templates = SqliteTemplateRepository::new(pool.clone());
    let only = TreeTemplate::new(RewardCandidate::new("Baobab", "Sabana", "", "", Some(1.0)));
    templates.create(&only).await.unwrap();

    for _ in 0..10 {
        let reward = state.pomodoro.complete("ana", Some(5)).await.unwrap();
        assert_eq!(reward.tree.name, "Baobab");
        assert_eq!(reward.tree.template_id, Some(only.id));
    }

    let stats = state.users.stats("ana").await.unwrap();
    assert_eq!(stats.pomodoros_completed, 10);
    assert_eq!(stats.total_focus_minutes, 50);
}

#[tokio::test]
async fn test_empty_catalog_is_seeded_on_first_completion() {
    let (state, pool, _dir) = common::app_state().await;
    let admin = common::add_user(&pool, "root", true).await;

    assert!(state.templates.list(Actor::User(&admin)).await.unwrap().is_empty());
    let reward = state.pomodoro.complete("root", None).await.unwrap();

    let names: HashSet<String> = default_catalog().into_iter().map(|r| r.name).collect();
    assert!(names.contains(&reward.tree.name));
    assert_eq!(state.templates.list(Actor::User(&admin)).await.unwrap().len(), names.len());
}

#[tokio::test]
async fn test_inventory_edits_stay_with_owner() {
    let (state, pool, _dir) = common::app_state().await;
    common::add_user(&pool, "ana", false).await;
    common::add_user(&pool, "luis", false).await;

    let reward = state.pomodoro.complete("ana", None).await.unwrap();
    let details = TreeDetails {
        name: "Mi primer árbol".to_string(),
        category: "Recuerdos".to_string(),
        description: String::new(),
        image_url: String::new(),
    };

    let err = state
        .inventory
        .update("luis", reward.tree.id, details.clone())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::TreeNotFound(_)));

    let updated = state.inventory.update("ana", reward.tree.id, details).await.unwrap();
    assert_eq!(updated.name, "Mi primer árbol");

    state.inventory.delete("ana", reward.tree.id).await.unwrap();
    assert_eq!(state.users.stats("ana").await.unwrap().total_trees, 0);
    // Counters are history, not inventory.
    assert_eq!(state.users.stats("ana").await.unwrap().pomodoros_completed, 1);
}

#[tokio::test]
async fn test_phrases_do_not_repeat_back_to_back() {
    let (state, _pool, _dir) = common::app_state().await;

    let picks: Vec<String> = {
        let mut picks = Vec::new();
        for _ in 0..3 {
            picks.push(state.phrases.next_phrase().await.unwrap());
        }
        picks
    };
    let unique: HashSet<&String> = picks.iter().collect();
    assert_eq!(unique.len(), 3);
}
