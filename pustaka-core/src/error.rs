//! Error types for pustaka-core
//!
//! "Not found" is not an error here: lookups return `Option`, so callers
//! can tell an absent row apart from a failed query.

use thiserror::Error;

use crate::models::Entity;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Caller-supplied input could not be used (pagination, id, entity name)
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The database rejected or failed to execute a query
    #[error("query failed: {0}")]
    QueryFailed(#[from] sqlx::Error),

    /// A row did not have the column layout expected for its table
    #[error("malformed {entity} row: {reason}")]
    MalformedRow { entity: Entity, reason: String },
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Create a malformed row error
    pub fn malformed_row(entity: Entity, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            entity,
            reason: reason.into(),
        }
    }

    /// True for errors caused by the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}
