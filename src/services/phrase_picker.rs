//! Random phrase picking that avoids recently returned phrases.
//!
//! A single [`NoImmediateRepeatPicker`] is shared by every request in the process.
//! Its rolling history is guarded by one mutex held across the whole
//! read-available / choose / append-evict sequence.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::domain::errors::SelectionError;

/// Number of recent phrases remembered by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

/// Fixed-capacity FIFO of recently returned phrases, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl PhraseHistory {
    /// Create an empty history. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.entries.iter().any(|p| p == phrase)
    }

    /// Append the newest entry, evicting the oldest once over capacity.
    pub fn push(&mut self, phrase: String) {
        self.entries.push_back(phrase);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Remove and return the oldest entry.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.entries.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for PhraseHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

/// Picks phrases at random while steering clear of the last few it returned.
#[derive(Debug, Default)]
pub struct NoImmediateRepeatPicker {
    history: Mutex<PhraseHistory>,
}

impl NoImmediateRepeatPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: Mutex::new(PhraseHistory::new(capacity)),
        }
    }

    /// Pick a phrase from `pool` using the thread-local generator.
    pub fn pick(&self, pool: &[String]) -> Result<String, SelectionError> {
        self.pick_with_rng(pool, &mut rand::thread_rng())
    }

    /// Pick a phrase from `pool`.
    ///
    /// - A single-item pool returns that item and leaves the history alone.
    /// - Otherwise a phrase absent from the history is chosen uniformly and appended.
    /// - When every pooled phrase is already in the history, the oldest history entry is
    ///   popped and returned without being appended again, so it may repeat on the very
    ///   next call.
    ///
    /// # Errors
    /// [`SelectionError::NoDataAvailable`] when `pool` is empty.
    pub fn pick_with_rng<R>(&self, pool: &[String], rng: &mut R) -> Result<String, SelectionError>
    where
        R: Rng + ?Sized,
    {
        if pool.len() <= 1 {
            return pool
                .first()
                .cloned()
                .ok_or_else(|| SelectionError::NoDataAvailable("phrase pool is empty".to_string()));
        }

        let mut history = self.lock();
        let available: Vec<&String> = pool.iter().filter(|p| !history.contains(p)).collect();

        let Some(&chosen) = available.choose(rng) else {
            // Every pooled phrase is remembered, so the history is non-empty.
            let oldest = history
                .pop_oldest()
                .ok_or_else(|| SelectionError::NoDataAvailable("phrase history is empty".to_string()))?;
            debug!(remembered = history.len(), "phrase pool exhausted, reusing oldest phrase");
            return Ok(oldest);
        };

        let chosen = chosen.clone();
        history.push(chosen.clone());
        Ok(chosen)
    }

    /// Snapshot of the history, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.lock().iter().map(str::to_owned).collect()
    }

    fn lock(&self) -> MutexGuard<'_, PhraseHistory> {
        // The history holds no invariant a panicking holder could break halfway.
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
