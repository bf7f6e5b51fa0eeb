//! HTTP server command
//!
//! Connects to PostgreSQL, applies the embedded migrations, optionally seeds
//! the card pool and serves the API until shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cards_server::db::{connect_and_migrate, DEFAULT_MAX_CONNECTIONS};
use cards_server::http::{run_server, ServerConfig};
use cards_server::import::seed_from_file;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seed the card pool from this document if it is empty
    #[arg(long, value_name = "PATH")]
    pub seed_file: Option<PathBuf>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting cards server on {}", args.bind);

    let pool = connect_and_migrate(&args.database_url, args.max_connections)
        .await
        .context("Database startup failed")?;

    if let Some(path) = &args.seed_file {
        seed_from_file(&pool, path, false)
            .await
            .with_context(|| format!("Failed to seed cards from {}", path.display()))?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
