//! Command implementations for the pustaka CLI

pub mod migrate;
pub mod serve;

use clap::Args;
use pustaka_core::DatabaseConfig;

pub use migrate::run_migrate;
pub use serve::run_serve;

/// Database connection settings shared by every command
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Full connection string; overrides the individual DB_* settings
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database host
    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database port
    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    /// Database user
    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database name
    #[arg(long, env = "DB_DBNAME", default_value = "pustaka")]
    pub db_name: String,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub db_max_connections: u32,
}

impl DbArgs {
    pub fn to_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database_url.clone(),
            host: self.db_host.clone(),
            port: self.db_port,
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            database: self.db_name.clone(),
            max_connections: self.db_max_connections,
        }
    }
}
