//! API error type with IntoResponse
//!
//! Every failure is rendered as `{"code": <status>, "message": <text>}`.
//! Database failures are logged and reported with an opaque message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pustaka_core::CatalogError;
use serde::Serialize;
use utoipa::ToSchema;

/// Message returned for any server-side query failure
pub const QUERY_FAILURE: &str = "database query failure";

/// Message returned when the requested record does not exist
pub const NOT_FOUND: &str = "no corresponding data found";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Bad pagination, id or filter input (400)
    BadRequest { message: String },

    /// Record absent (404)
    NotFound,

    /// Query or row mapping failure (500, logged)
    Database(CatalogError),

    /// HTML template failed to render (500, logged)
    Render(askama::Error),
}

/// JSON error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest { message } => message,
            Self::NotFound => NOT_FOUND.to_string(),
            Self::Database(e) => {
                tracing::error!(error = %e, "database error");
                QUERY_FAILURE.to_string()
            }
            Self::Render(e) => {
                tracing::error!(error = %e, "template error");
                "page rendering failure".to_string()
            }
        };

        let body = ErrorBody {
            code: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        if e.is_client_error() {
            Self::bad_request(e.to_string())
        } else {
            Self::Database(e)
        }
    }
}

impl From<askama::Error> for ApiError {
    fn from(e: askama::Error) -> Self {
        Self::Render(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn bad_request_is_400() {
        let response = ApiError::bad_request("parameter 'id' must be a valid number").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["code"], 400);
        assert_eq!(body["message"], "parameter 'id' must be a valid number");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], NOT_FOUND);
    }

    #[tokio::test]
    async fn database_error_is_opaque() {
        let err = ApiError::from(CatalogError::QueryFailed(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["code"], 500);
        assert_eq!(body["message"], QUERY_FAILURE);
    }

    #[test]
    fn invalid_parameter_maps_to_bad_request() {
        let err = ApiError::from(CatalogError::invalid_parameter("page", "must be a valid number"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        match err {
            ApiError::BadRequest { message } => assert!(message.contains("'page'")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
