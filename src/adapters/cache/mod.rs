//! File-backed caches.
//!
//! The daily phrase pool lives in a small JSON file next to the database.

pub mod phrase_file;

pub use phrase_file::JsonPhraseCache;
