//! Database layer - connection pool, query building and the DAO
//!
//! # Design Principles
//!
//! - Single shared PgPool, bounded by `max_connections`
//! - Every caller value is a bound parameter; identifiers come from `Entity`
//! - Relations are fetched with one query per related table, then merged
//! - No cross-request caching and no request-level transactions

pub mod dao;
pub mod pool;
pub mod query;
pub mod relations;
pub mod rows;

pub use dao::Dao;
pub use pool::{create_pool, MIGRATOR};
pub use query::Filter;
