//! Pomodoro Forest CLI entry point.

use anyhow::Result;
use clap::Parser;

use forest::cli::{commands, handle_error, Cli, Commands};
use forest::infrastructure::config::ConfigLoader;
use forest::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = run(cli).await {
        handle_error(err, json_mode);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ConfigLoader::load()?;
    let _logger = LoggerImpl::init(&LogConfig::from(&config.logging))?;

    match cli.command {
        Commands::Init(args) => commands::init::execute(args, &config, cli.json).await,
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::User(args) => commands::user::execute(args, &config, cli.json).await,
        Commands::Template(args) => commands::template::execute(args, &config, cli.json).await,
        Commands::Phrase(args) => commands::phrase::execute(args, &config, cli.json).await,
    }
}
