use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use pustaka_core::{CatalogError, Dao, Window};

use super::query::Query;
use crate::http::error::QUERY_FAILURE;

/// The complete GraphQL schema
pub type CatalogSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Create the schema with the DAO in its context data
pub fn build_schema(dao: Dao) -> CatalogSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(dao)
        .finish()
}

/// Caller mistakes keep their message; server failures are logged and
/// reported opaquely.
pub(crate) fn to_gql_error(e: CatalogError) -> async_graphql::Error {
    if e.is_client_error() {
        async_graphql::Error::new(e.to_string())
    } else {
        tracing::error!(error = %e, "graphql resolver failed");
        async_graphql::Error::new(QUERY_FAILURE)
    }
}

pub(crate) fn window(page: i32, per_page: i32) -> async_graphql::Result<Window> {
    Window::from_page(page.into(), per_page.into()).map_err(to_gql_error)
}
