//! GraphQL schema over the catalog

pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_schema, CatalogSchema};
