//! HTTP server command
//!
//! Runs the catalog server with REST, GraphQL and HTML routes.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;
use pustaka_core::{create_pool, Dao, MIGRATOR};
use pustaka_server::{run_server, ServerConfig};

use super::DbArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to listen on. Not read from `HOST`, which shells set to the hostname.
    #[arg(long, env = "PUSTAKA_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long, env = "CORS_PERMISSIVE")]
    pub cors_permissive: bool,

    /// Apply pending schema migrations before serving
    #[arg(long)]
    pub migrate: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

impl ServeArgs {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_permissive: self.cors_permissive,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db.to_config();
    let config = args.server_config();

    tracing::info!(database = %db_config.describe(), "Starting pustaka server on {}", config.bind_addr);

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;

    if args.migrate {
        MIGRATOR
            .run(&pool)
            .await
            .context("Failed to apply migrations")?;
        tracing::info!("migrations applied");
    }

    // Blocks until shutdown; closes the pool on the way out.
    run_server(Dao::new(pool), config)
        .await
        .context("Server error")?;

    Ok(())
}
