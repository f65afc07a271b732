//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;
use pustaka_core::{create_pool, MIGRATOR};

use super::DbArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// List the bundled migrations without connecting
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub db: DbArgs,
}

/// Apply the bundled catalog schema migrations
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    if args.dry_run {
        for migration in MIGRATOR.iter() {
            println!("{} {}", migration.version, migration.description);
        }
        return Ok(());
    }

    let db_config = args.db.to_config();
    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;

    MIGRATOR
        .run(&pool)
        .await
        .with_context(|| format!("Failed to apply migrations to {}", db_config.describe()))?;

    tracing::info!(
        migrations = MIGRATOR.iter().count(),
        database = %db_config.describe(),
        "schema up to date"
    );

    pool.close().await;
    Ok(())
}
