//! OpenAPI document for the REST routes
//!
//! Served as JSON at `/api/docs/openapi.json` with a Scalar viewer at
//! `/api/docs`. GraphQL and the HTML pages are not described here.

use axum::{routing::get, Json, Router};
use pustaka_core::{Book, Item, PaginationParams};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::http::error::ErrorBody;
use crate::http::routes::{books, health};
use crate::state::AppState;

// The item routes are closures over their table (see `routes::items`), so
// each concrete path is described by a documentation-only stub.

macro_rules! item_docs {
    ($list:ident, $get:ident, $path:literal, $id_path:literal, $tag:literal) => {
        /// Distinct items ordered by name
        #[utoipa::path(
            get,
            path = $path,
            tag = $tag,
            params(PaginationParams),
            responses(
                (status = 200, description = "One record per item id, without books", body = [Item]),
                (status = 400, description = "Bad pagination", body = ErrorBody),
                (status = 500, description = "Query failure", body = ErrorBody),
            )
        )]
        #[allow(unused)]
        fn $list() {}

        /// One item with a page of its books
        #[utoipa::path(
            get,
            path = $id_path,
            tag = $tag,
            params(("id" = i32, Path, description = "Item id"), PaginationParams),
            responses(
                (status = 200, description = "The item and one page of its books", body = Item),
                (status = 400, description = "Non-numeric id or bad pagination", body = ErrorBody),
                (status = 404, description = "No such item", body = ErrorBody),
                (status = 500, description = "Query failure", body = ErrorBody),
            )
        )]
        #[allow(unused)]
        fn $get() {}
    };
}

item_docs!(list_authors, get_author, "/api/author", "/api/author/{id}", "authors");
item_docs!(list_categories, get_category, "/api/category", "/api/category/{id}", "categories");
item_docs!(list_tags, get_tag, "/api/tag", "/api/tag/{id}", "tags");

#[derive(OpenApi)]
#[openapi(
    info(title = "Pustaka API", description = "Read-only book catalog"),
    paths(
        books::list_books,
        books::get_book,
        list_authors,
        get_author,
        list_categories,
        get_category,
        list_tags,
        get_tag,
        health::health,
        health::status,
    ),
    components(schemas(Book, Item, ErrorBody, health::HealthResponse, health::StatusResponse)),
    tags(
        (name = "books", description = "Books and item-name search"),
        (name = "authors", description = "Authors and their books"),
        (name = "categories", description = "Categories and their books"),
        (name = "tags", description = "Tags and their books"),
        (name = "health", description = "Liveness and database checks"),
    )
)]
pub struct ApiDoc;

/// Docs routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(Scalar::with_url("/api/docs", ApiDoc::openapi()))
}
