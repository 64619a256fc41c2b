//! Service layer: reward selection, phrase picking and the use cases built on them.

pub mod inventory_service;
pub mod phrase_picker;
pub mod phrase_service;
pub mod pomodoro_service;
pub mod template_service;
pub mod tree_selector;
pub mod user_service;

pub use inventory_service::InventoryService;
pub use phrase_picker::{NoImmediateRepeatPicker, PhraseHistory, DEFAULT_HISTORY_CAPACITY};
pub use phrase_service::{PhraseService, PHRASE_FALLBACK, START_FALLBACK_PHRASE};
pub use pomodoro_service::{PomodoroService, COMPLETION_MESSAGE, FALLBACK_AUDIO_URL};
pub use template_service::{Actor, TemplateService};
pub use tree_selector::WeightedTreeSelector;
pub use user_service::UserService;
