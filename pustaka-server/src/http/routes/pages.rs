//! Server-rendered HTML pages
//!
//! Pages reuse the JSON error mapping: a bad id or page is a 400, a
//! missing record or an empty page is a 404.

use askama::Template;
use axum::extract::State;
use axum::response::Html;
use axum::{routing::get, Router};
use pustaka_core::{Entity, Envelope, Window};

use crate::http::error::ApiError;
use crate::http::extractors::{PageWindow, ValidId};
use crate::state::AppState;
use crate::templates::{DetailTemplate, EntityTemplate, FilterLists, FilterTemplate, IndexTemplate};

fn render<T: Template>(template: &T) -> Result<Html<String>, ApiError> {
    Ok(Html(template.render()?))
}

/// GET / - landing page with one page of books
async fn landing(
    State(state): State<AppState>,
    PageWindow(window): PageWindow,
) -> Result<Html<String>, ApiError> {
    let books = state.dao().list_books(window).await?;
    if books.is_empty() {
        return Err(ApiError::NotFound);
    }

    render(&IndexTemplate {
        page: Envelope::new(window.meta("all"), books),
    })
}

/// GET /book/{id}
async fn book_page(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Html<String>, ApiError> {
    let book = state.dao().get_book_by_id(id).await?.ok_or(ApiError::NotFound)?;
    render(&DetailTemplate { book })
}

/// GET /{kind}/{id} - item page with one page of its books
async fn item_page(
    entity: Entity,
    state: AppState,
    id: i32,
    window: Window,
) -> Result<Html<String>, ApiError> {
    let item = state
        .dao()
        .get_item_by_id(entity, id, window)
        .await?
        .ok_or(ApiError::NotFound)?;

    let kind = entity.route_segment();
    render(&EntityTemplate {
        kind,
        page: Envelope::new(window.meta(format!("{kind}/{id}")), item),
    })
}

/// GET /filter - distinct authors, categories and tags
async fn filter_page(
    State(state): State<AppState>,
    PageWindow(window): PageWindow,
) -> Result<Html<String>, ApiError> {
    let dao = state.dao();
    let lists = FilterLists {
        authors: dao.get_distinct_items(Entity::Authors, window).await?,
        categories: dao.get_distinct_items(Entity::Categories, window).await?,
        tags: dao.get_distinct_items(Entity::Tags, window).await?,
    };
    if lists.is_empty() {
        return Err(ApiError::NotFound);
    }

    render(&FilterTemplate {
        page: Envelope::new(window.meta("filter"), lists),
    })
}

/// Page routes
pub fn router() -> Router<AppState> {
    let router = Router::new()
        .route("/", get(landing))
        .route("/book/{id}", get(book_page))
        .route("/filter", get(filter_page));

    Entity::ITEM_KINDS.into_iter().fold(router, |router, entity| {
        router.route(
            &format!("/{}/{{id}}", entity.route_segment()),
            get(
                move |State(state): State<AppState>,
                      ValidId(id): ValidId,
                      PageWindow(window): PageWindow| {
                    item_page(entity, state, id, window)
                },
            ),
        )
    })
}
