use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

use crate::error::{CatalogError, Result};

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Entity Store connection settings
///
/// Either a full `url`, or the individual parts. The parts are handed to
/// sqlx as-is, so passwords never need URL escaping.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: None,
            database: "pustaka".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// Build sqlx connection options. `url` wins over the parts.
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url).map_err(|e| {
                CatalogError::invalid_parameter("database_url", e.to_string())
            });
        }

        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        if let Some(password) = &self.password {
            options = options.password(password);
        }

        Ok(options)
    }

    /// Human-readable target for logs, without credentials.
    pub fn describe(&self) -> String {
        match &self.url {
            Some(_) => "DATABASE_URL".to_string(),
            None => format!("{}:{}/{}", self.host, self.port, self.database),
        }
    }
}
