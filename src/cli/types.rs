//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use crate::cli::commands::{
    init::InitArgs, phrase::PhraseArgs, serve::ServeArgs, template::TemplateArgs, user::UserArgs,
};

#[derive(Parser, Debug)]
#[command(name = "forest")]
#[command(about = "Pomodoro Forest - focus sessions that grow a forest", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the project directory, configuration and database
    Init(InitArgs),

    /// Run the HTTP API
    Serve(ServeArgs),

    /// Manage users
    User(UserArgs),

    /// Manage the tree template catalog
    Template(TemplateArgs),

    /// Inspect and import motivational phrases
    Phrase(PhraseArgs),
}
