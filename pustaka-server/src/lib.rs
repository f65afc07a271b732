//! pustaka-server: HTTP adapters over the catalog DAO
//!
//! Serves the catalog three ways: a JSON API under `/api`, a GraphQL
//! endpoint under `/gql` and server-rendered HTML pages. Handlers only
//! marshal requests into [`pustaka_core::Dao`] calls.

pub mod graphql;
pub mod http;
pub mod state;
pub mod templates;

pub use http::server::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
