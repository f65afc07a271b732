//! HTTP layer: router, extractors, error mapping and route handlers

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
