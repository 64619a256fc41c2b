//! User accounts and their focus statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum accepted username length.
pub const MAX_USERNAME_LEN: usize = 64;

/// A registered user.
///
/// Credentials are not stored here; the service trusts the identity forwarded by the
/// authenticating gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: Option<String>,
    pub is_admin: bool,
    pub pomodoros_completed: u64,
    pub total_focus_minutes: u64,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: impl Into<String>, email: Option<String>) -> Self {
        Self {
            username: username.into(),
            email,
            is_admin: false,
            pomodoros_completed: 0,
            total_focus_minutes: 0,
            created_at: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let name = self.username.trim();
        if name.is_empty() {
            return Err("Username cannot be empty".to_string());
        }
        if name.len() != self.username.len() {
            return Err("Username cannot start or end with whitespace".to_string());
        }
        if self.username.chars().count() > MAX_USERNAME_LEN {
            return Err(format!("Username cannot exceed {MAX_USERNAME_LEN} characters"));
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(format!("Invalid email address: {email}"));
            }
        }
        Ok(())
    }
}

/// Aggregated statistics reported for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_trees: u64,
    pub pomodoros_completed: u64,
    pub total_focus_minutes: u64,
}
