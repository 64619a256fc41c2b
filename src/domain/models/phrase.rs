//! The daily motivational phrase cache.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shortest text accepted as a phrase.
pub const MIN_PHRASE_LEN: usize = 16;

/// Phrases cached for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseCache {
    /// Day the phrases were stored, serialised as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub phrases: Vec<String>,
}

impl PhraseCache {
    pub fn new(date: NaiveDate, phrases: Vec<String>) -> Self {
        Self { date, phrases }
    }

    pub fn is_for(&self, day: NaiveDate) -> bool {
        self.date == day
    }
}

/// Collapse runs of whitespace, trim, and drop texts too short to be a phrase.
pub fn normalize_phrase(raw: &str) -> Option<String> {
    let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() < MIN_PHRASE_LEN {
        None
    } else {
        Some(text)
    }
}

/// Normalise a batch of phrases, keeping first occurrences only.
pub fn normalize_phrases<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut phrases: Vec<String> = Vec::new();
    for text in raw {
        if let Some(phrase) = normalize_phrase(text.as_ref()) {
            if !phrases.contains(&phrase) {
                phrases.push(phrase);
            }
        }
    }
    phrases
}
