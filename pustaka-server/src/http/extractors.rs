//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use pustaka_core::{PaginationParams, Window};

use super::error::ApiError;

/// Extract a numeric record id from the path
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let invalid = || ApiError::bad_request("parameter 'id' must be a valid number");

        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid())?;

        raw.parse::<i32>().map(Self).map_err(|_| invalid())
    }
}

/// Extract `page` / `per_page` from the query string as a [`Window`]
pub struct PageWindow(pub Window);

impl<S> FromRequestParts<S> for PageWindow
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<PaginationParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        Ok(Self(params.window()?))
    }
}
