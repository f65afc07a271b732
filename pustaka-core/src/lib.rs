//! pustaka-core: catalog data access
//!
//! Translates entity/filter/pagination requests into parameterized
//! PostgreSQL queries and reassembles the denormalized join rows into
//! nested [`Book`] and [`Item`] records.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod text;

pub use config::DatabaseConfig;
pub use db::{create_pool, Dao, Filter, MIGRATOR};
pub use error::{CatalogError, Result};
pub use models::{paginate, Book, Entity, Envelope, Item, Listing, PageMeta, PaginationParams, Window};
