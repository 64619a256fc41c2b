//! Implementation of the `forest serve` command.

use anyhow::{anyhow, Context, Result};
use clap::Args;

use crate::adapters::http::{AppState, ForestHttpServer};
use crate::adapters::sqlite::initialize_with_config;
use crate::domain::models::Config;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,
}

pub async fn execute(args: ServeArgs, config: &Config) -> Result<()> {
    let mut server_config = config.server.clone();
    if let Some(host) = args.host {
        server_config.host = host;
    }
    if let Some(port) = args.port {
        server_config.port = port;
    }

    let pool = initialize_with_config(&config.database)
        .await
        .context("Failed to initialize database")?;

    let state = AppState::new(pool.clone(), config);
    ForestHttpServer::new(state, server_config)
        .serve_with_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow!(e))
        .context("HTTP server failed")?;

    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
