//! User CLI commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::sync::Arc;

use crate::adapters::sqlite::{SqliteTreeRepository, SqliteUserRepository};
use crate::cli::commands::open_database;
use crate::cli::output::{output, table, CommandOutput};
use crate::domain::models::{Config, User};
use crate::services::UserService;

#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommands,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Register a user
    Add {
        /// Username forwarded by the gateway
        username: String,
        /// Contact email
        #[arg(short, long)]
        email: Option<String>,
        /// Grant administrator rights
        #[arg(long)]
        admin: bool,
    },
    /// List users
    List,
    /// Grant or revoke administrator rights
    Admin {
        /// Username
        username: String,
        /// Revoke instead of grant
        #[arg(long)]
        revoke: bool,
    },
}

#[derive(Debug, serde::Serialize)]
pub struct UserOutput {
    pub username: String,
    pub email: Option<String>,
    pub is_admin: bool,
    pub pomodoros_completed: u64,
    pub total_focus_minutes: u64,
}

impl From<&User> for UserOutput {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
            pomodoros_completed: user.pomodoros_completed,
            total_focus_minutes: user.total_focus_minutes,
        }
    }
}

impl CommandOutput for UserOutput {
    fn to_human(&self) -> String {
        let role = if self.is_admin { "administrator" } else { "user" };
        format!(
            "{} ({role})\nPomodoros: {}\nFocus minutes: {}",
            self.username, self.pomodoros_completed, self.total_focus_minutes
        )
    }
}

#[derive(Debug, serde::Serialize)]
pub struct UserListOutput {
    pub users: Vec<UserOutput>,
    pub total: usize,
}

impl CommandOutput for UserListOutput {
    fn to_human(&self) -> String {
        if self.users.is_empty() {
            return "No users found.".to_string();
        }

        let mut t = table(["Username", "Email", "Admin", "Pomodoros", "Minutes"]);
        for user in &self.users {
            t.add_row(vec![
                user.username.clone(),
                user.email.clone().unwrap_or_else(|| "-".to_string()),
                if user.is_admin { "yes" } else { "no" }.to_string(),
                user.pomodoros_completed.to_string(),
                user.total_focus_minutes.to_string(),
            ]);
        }
        format!("Found {} user(s):\n{t}", self.total)
    }
}

pub async fn execute(args: UserArgs, config: &Config, json_mode: bool) -> Result<()> {
    let pool = open_database(config).await?;
    let service = UserService::new(
        Arc::new(SqliteUserRepository::new(pool.clone())),
        Arc::new(SqliteTreeRepository::new(pool)),
    );

    match args.command {
        UserCommands::Add {
            username,
            email,
            admin,
        } => {
            let mut user = service
                .register(&username, email)
                .await
                .context("Failed to register user")?;
            if admin {
                user = service.set_admin(&username, true).await?;
            }
            output(&UserOutput::from(&user), json_mode);
        }
        UserCommands::List => {
            let users: Vec<UserOutput> = service.list().await?.iter().map(UserOutput::from).collect();
            let total = users.len();
            output(&UserListOutput { users, total }, json_mode);
        }
        UserCommands::Admin { username, revoke } => {
            let user = service
                .set_admin(&username, !revoke)
                .await
                .with_context(|| format!("Failed to update {username}"))?;
            output(&UserOutput::from(&user), json_mode);
        }
    }

    Ok(())
}
