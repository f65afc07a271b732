//! pustaka CLI - book catalog service
//!
//! - `serve`: REST, GraphQL and HTML pages over the catalog database
//! - `migrate`: apply the bundled catalog schema
//!
//! Settings come from flags, the environment, or a `.env` file in the
//! working directory.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "pustaka",
    author,
    version,
    about = "Book catalog service: REST, GraphQL and HTML pages over PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),

    /// Apply the catalog schema migrations
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so `.env` values reach clap's `env` fallbacks.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let tracing_config = TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    };
    if let Err(e) = tracing_setup::init(&tracing_config) {
        eprintln!("failed to initialize tracing: {e}");
    }

    let result = match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
    };

    tracing_setup::shutdown();
    result
}
