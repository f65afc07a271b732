//! Author, category and tag endpoints
//!
//! The three item tables share handlers; each route closes over its
//! [`Entity`].

use axum::extract::State;
use axum::{routing::get, Json, Router};
use pustaka_core::{Entity, Item, Window};

use crate::http::error::ApiError;
use crate::http::extractors::{PageWindow, ValidId};
use crate::state::AppState;

/// GET /api/{kind} - distinct items ordered by name
async fn list_items(
    entity: Entity,
    state: AppState,
    window: Window,
) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(state.dao().get_distinct_items(entity, window).await?))
}

/// GET /api/{kind}/{id} - one item with a page of its books
async fn get_item(
    entity: Entity,
    state: AppState,
    id: i32,
    window: Window,
) -> Result<Json<Item>, ApiError> {
    let item = state
        .dao()
        .get_item_by_id(entity, id, window)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(item))
}

/// Item routes for every item table
pub fn router() -> Router<AppState> {
    Entity::ITEM_KINDS
        .into_iter()
        .fold(Router::new(), |router, entity| {
            let segment = entity.route_segment();
            router
                .route(
                    &format!("/api/{segment}"),
                    get(
                        move |State(state): State<AppState>, PageWindow(window): PageWindow| {
                            list_items(entity, state, window)
                        },
                    ),
                )
                .route(
                    &format!("/api/{segment}/{{id}}"),
                    get(
                        move |State(state): State<AppState>,
                              ValidId(id): ValidId,
                              PageWindow(window): PageWindow| {
                            get_item(entity, state, id, window)
                        },
                    ),
                )
        })
}
