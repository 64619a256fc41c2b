pub mod config;
pub mod phrase;
pub mod reward;
pub mod session;
pub mod tree;
pub mod user;

pub use config::{
    AudioConfig, Config, DatabaseConfig, LoggingConfig, PhrasesConfig, PomodoroConfig,
    ServerConfig,
};
pub use phrase::{normalize_phrase, normalize_phrases, PhraseCache, MIN_PHRASE_LEN};
pub use reward::{default_catalog, fallback_reward, RewardCandidate, Weighted, DEFAULT_WEIGHT};
pub use session::{
    validate_duration, FocusSession, SessionReward, DEFAULT_SESSION_MINUTES, MAX_SESSION_MINUTES,
};
pub use tree::{OwnedTree, TreeDetails, TreeTemplate};
pub use user::{User, UserStats, MAX_USERNAME_LEN};
