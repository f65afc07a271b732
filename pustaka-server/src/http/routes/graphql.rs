//! GraphQL endpoints

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::Html;
use axum::{routing::get, Router};

use crate::state::AppState;

/// GET /gql - GraphiQL IDE
async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql/query").finish())
}

/// GET|POST /gql/query
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema().execute(req.into_inner()).await.into()
}

/// GraphQL routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/gql", get(graphiql))
        .route("/gql/query", get(graphql_handler).post(graphql_handler))
}
