//! Focus sessions: starting one and rewarding its completion with a tree.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    fallback_reward, validate_duration, FocusSession, OwnedTree, SessionReward,
    DEFAULT_SESSION_MINUTES,
};
use crate::domain::ports::{AudioSource, PhraseStore, TemplateRepository, TreeRepository, UserRepository};
use crate::services::phrase_service::{PhraseService, START_FALLBACK_PHRASE};
use crate::services::template_service::TemplateService;
use crate::services::tree_selector::WeightedTreeSelector;

/// Played when no ambient track is configured.
pub const FALLBACK_AUDIO_URL: &str =
    "https://assets.mixkit.co/sfx/preview/mixkit-forest-stream-ambience-loop-542.mp3";

/// Message returned with every reward.
pub const COMPLETION_MESSAGE: &str = "¡Felicidades! Has completado un pomodoro.";

pub struct PomodoroService<U, T, C, S>
where
    U: UserRepository,
    T: TreeRepository,
    C: TemplateRepository,
    S: PhraseStore,
{
    users: Arc<U>,
    trees: Arc<T>,
    templates: Arc<C>,
    phrases: Arc<PhraseService<S>>,
    audio: Arc<dyn AudioSource>,
    selector: WeightedTreeSelector,
    default_minutes: u32,
}

impl<U, T, C, S> PomodoroService<U, T, C, S>
where
    U: UserRepository,
    T: TreeRepository,
    C: TemplateRepository,
    S: PhraseStore,
{
    pub fn new(
        users: Arc<U>,
        trees: Arc<T>,
        templates: Arc<C>,
        phrases: Arc<PhraseService<S>>,
        audio: Arc<dyn AudioSource>,
    ) -> Self {
        Self {
            users,
            trees,
            templates,
            phrases,
            audio,
            selector: WeightedTreeSelector::new(),
            default_minutes: DEFAULT_SESSION_MINUTES,
        }
    }

    /// Session length used when a request leaves it out.
    pub fn with_default_minutes(mut self, minutes: u32) -> Self {
        self.default_minutes = minutes;
        self
    }

    /// Start a focus session for `username`.
    pub async fn start(&self, username: &str, duration: Option<u32>) -> DomainResult<FocusSession> {
        let duration = duration.unwrap_or(self.default_minutes);
        validate_duration(duration).map_err(DomainError::ValidationFailed)?;

        let audio_url = match self.audio.ambient_url().await {
            Some(url) => url,
            None => FALLBACK_AUDIO_URL.to_string(),
        };
        let phrase = match self.phrases.phrase_of_the_day().await {
            Some(phrase) => phrase,
            None => START_FALLBACK_PHRASE.to_string(),
        };

        let session = FocusSession::starting_at(Utc::now(), duration, audio_url, phrase);
        info!(username, duration, end_time = %session.end_time, "focus session started");
        Ok(session)
    }

    /// Complete a focus session: draw a tree, store it, and bump the user's counters.
    pub async fn complete(&self, username: &str, minutes: Option<u32>) -> DomainResult<SessionReward> {
        let minutes = minutes.unwrap_or(self.default_minutes);
        validate_duration(minutes).map_err(DomainError::ValidationFailed)?;

        if self.users.get(username).await?.is_none() {
            return Err(DomainError::UserNotFound(username.to_string()));
        }

        let mut catalog = self.templates.list().await?;
        if catalog.is_empty() {
            let seeded = TemplateService::new(self.templates.clone()).seed_defaults().await?;
            info!(seeded, "tree catalog was empty, seeded defaults");
            catalog = self.templates.list().await?;
        }

        let (reward, template_id) = match self.selector.select_random(&catalog) {
            Ok(template) => (template.reward.clone(), Some(template.id)),
            Err(e) => {
                warn!(error = %e, "reward selection failed, granting fallback tree");
                (fallback_reward(), None)
            }
        };

        let tree = OwnedTree::earned(username, &reward, template_id);
        self.trees.grant(&tree, u64::from(minutes)).await?;

        info!(username, minutes, tree = %tree.name, "focus session completed");
        Ok(SessionReward {
            message: COMPLETION_MESSAGE.to_string(),
            tree,
        })
    }
}
