//! Services shared by every request.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::adapters::audio::ConfiguredAudioSource;
use crate::adapters::cache::JsonPhraseCache;
use crate::adapters::sqlite::{SqliteTemplateRepository, SqliteTreeRepository, SqliteUserRepository};
use crate::domain::models::Config;
use crate::services::{
    InventoryService, NoImmediateRepeatPicker, PhraseService, PomodoroService, TemplateService,
    UserService,
};

pub type ForestUserService = UserService<SqliteUserRepository, SqliteTreeRepository>;
pub type ForestPhraseService = PhraseService<JsonPhraseCache>;
pub type ForestPomodoroService = PomodoroService<
    SqliteUserRepository,
    SqliteTreeRepository,
    SqliteTemplateRepository,
    JsonPhraseCache,
>;

/// Shared state for the HTTP server.
///
/// One phrase picker lives here for the whole process, so its history spans requests.
pub struct AppState {
    pub users: ForestUserService,
    pub inventory: InventoryService<SqliteTreeRepository>,
    pub templates: TemplateService<SqliteTemplateRepository>,
    pub pomodoro: ForestPomodoroService,
    pub phrases: Arc<ForestPhraseService>,
}

impl AppState {
    /// Wire the SQLite repositories, phrase cache and audio list from `config`.
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        let users = Arc::new(SqliteUserRepository::new(pool.clone()));
        let trees = Arc::new(SqliteTreeRepository::new(pool.clone()));
        let templates = Arc::new(SqliteTemplateRepository::new(pool));

        let store = Arc::new(JsonPhraseCache::new(&config.phrases.cache_path));
        let picker = Arc::new(NoImmediateRepeatPicker::with_capacity(
            config.phrases.history_capacity,
        ));
        let phrases = Arc::new(
            PhraseService::new(store, config.phrases.seed.clone()).with_picker(picker),
        );
        let audio = Arc::new(ConfiguredAudioSource::new(config.audio.urls.iter().cloned()));

        let pomodoro = PomodoroService::new(
            users.clone(),
            trees.clone(),
            templates.clone(),
            phrases.clone(),
            audio,
        )
        .with_default_minutes(config.pomodoro.default_minutes);

        Self {
            users: UserService::new(users, trees.clone()),
            inventory: InventoryService::new(trees),
            templates: TemplateService::new(templates),
            pomodoro,
            phrases,
        }
    }
}
