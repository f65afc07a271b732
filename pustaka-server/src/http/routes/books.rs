//! Book endpoints

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use pustaka_core::{Book, Entity, PaginationParams};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::http::error::{ApiError, ErrorBody};
use crate::http::extractors::{PageWindow, ValidId};
use crate::state::AppState;

/// Search parameters for `GET /api/book`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookSearch {
    /// `all` (default), `authors`, `categories` or `tags`
    pub filter: Option<String>,
    /// Item name to match, ignoring case; required unless `filter` is `all`
    pub query: Option<String>,
}

/// What a `GET /api/book` request asks for
#[derive(Debug, PartialEq, Eq)]
enum BookListing<'a> {
    All,
    Filtered { entity: Entity, name: &'a str },
}

impl BookSearch {
    fn listing(&self) -> Result<BookListing<'_>, ApiError> {
        let filter = self.filter.as_deref().unwrap_or("all");
        if filter == "all" {
            return Ok(BookListing::All);
        }

        let entity = Entity::parse_item(filter).map_err(|_| {
            ApiError::bad_request("query string 'filter' must be one of 'all', 'authors', 'categories', 'tags'")
        })?;
        let name = self
            .query
            .as_deref()
            .filter(|q| !q.is_empty())
            .ok_or_else(|| ApiError::bad_request("query string 'query' not found"))?;

        Ok(BookListing::Filtered { entity, name })
    }
}

/// GET /api/book - page of books, optionally filtered by item name
#[utoipa::path(
    get,
    path = "/api/book",
    tag = "books",
    summary = "List books",
    params(PaginationParams, BookSearch),
    responses(
        (status = 200, description = "One page of books ordered by id, without relations", body = [Book]),
        (status = 400, description = "Bad pagination or filter", body = ErrorBody),
        (status = 500, description = "Query failure", body = ErrorBody),
    )
)]
pub(crate) async fn list_books(
    State(state): State<AppState>,
    PageWindow(window): PageWindow,
    Query(search): Query<BookSearch>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = match search.listing()? {
        BookListing::All => state.dao().list_books(window).await?,
        BookListing::Filtered { entity, name } => {
            state.dao().get_filter_books(entity, name, window).await?
        }
    };
    Ok(Json(books))
}

/// GET /api/book/{id} - one book with its authors, categories and tags
#[utoipa::path(
    get,
    path = "/api/book/{id}",
    tag = "books",
    summary = "Get a book",
    params(("id" = i32, Path, description = "Book id")),
    responses(
        (status = 200, description = "The book with its authors, categories and tags", body = Book),
        (status = 400, description = "Non-numeric id", body = ErrorBody),
        (status = 404, description = "No such book", body = ErrorBody),
        (status = 500, description = "Query failure", body = ErrorBody),
    )
)]
pub(crate) async fn get_book(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Book>, ApiError> {
    let book = state.dao().get_book_by_id(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(book))
}

/// Book routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/book", get(list_books))
        .route("/api/book/{id}", get(get_book))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(filter: Option<&str>, query: Option<&str>) -> BookSearch {
        BookSearch {
            filter: filter.map(str::to_owned),
            query: query.map(str::to_owned),
        }
    }

    #[test]
    fn missing_filter_lists_everything() {
        assert_eq!(search(None, None).listing().unwrap(), BookListing::All);
        assert_eq!(search(Some("all"), Some("ignored")).listing().unwrap(), BookListing::All);
    }

    #[test]
    fn item_filter_needs_query() {
        let err = search(Some("authors"), None).listing().unwrap_err();
        assert!(matches!(err, ApiError::BadRequest { .. }));

        let err = search(Some("authors"), Some("")).listing().unwrap_err();
        assert!(matches!(err, ApiError::BadRequest { .. }));
    }

    #[test]
    fn item_filter_with_query() {
        let s = search(Some("tags"), Some("smp"));
        assert_eq!(
            s.listing().unwrap(),
            BookListing::Filtered {
                entity: Entity::Tags,
                name: "smp"
            }
        );
    }

    #[test]
    fn unknown_or_book_filter_rejected() {
        assert!(search(Some("books"), Some("x")).listing().is_err());
        assert!(search(Some("publisher"), Some("x")).listing().is_err());
    }
}
