//! Focus session models.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::tree::OwnedTree;

/// Default focus session length in minutes.
pub const DEFAULT_SESSION_MINUTES: u32 = 25;

/// Longest accepted focus session in minutes.
pub const MAX_SESSION_MINUTES: u32 = 180;

/// Check a requested session length.
pub fn validate_duration(minutes: u32) -> Result<(), String> {
    if minutes == 0 || minutes > MAX_SESSION_MINUTES {
        return Err(format!(
            "Session duration must be between 1 and {MAX_SESSION_MINUTES} minutes, got {minutes}"
        ));
    }
    Ok(())
}

/// A started focus session, as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSession {
    pub end_time: DateTime<Utc>,
    pub duration: u32,
    pub audio_url: String,
    pub motivational_phrase: String,
}

impl FocusSession {
    pub fn starting_at(
        start: DateTime<Utc>,
        duration: u32,
        audio_url: String,
        motivational_phrase: String,
    ) -> Self {
        Self {
            end_time: start + Duration::minutes(i64::from(duration)),
            duration,
            audio_url,
            motivational_phrase,
        }
    }
}

/// The reward handed out when a focus session completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReward {
    pub message: String,
    pub tree: OwnedTree,
}
