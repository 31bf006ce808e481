//! API error types with IntoResponse
//!
//! Every domain outcome that is not a success is converted to a JSON body
//! here. Storage details are logged and never returned to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::StoreError;
use crate::models::{UserId, ValidationError};

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Required fields missing or too long (400)
    Validation(ValidationError),

    /// Path id is not a valid user id (400)
    InvalidId { message: String },

    /// Body is not a JSON object of the expected shape (400)
    InvalidBody { reason: String },

    /// User does not exist (404)
    NotFound { id: UserId },

    /// Unique value already taken (400)
    DuplicateKey,

    /// No route for this method and path (404)
    RouteNotFound,

    /// Database not connected yet (503)
    NotReady,

    /// Database error (500, logged)
    Storage(StoreError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string(),
                    "fields": e.fields(),
                }),
            ),
            Self::InvalidId { message } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "invalid_id",
                    "message": message
                }),
            ),
            Self::InvalidBody { reason } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "invalid_body",
                    "message": reason
                }),
            ),
            Self::NotFound { id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("user '{}' not found", id)
                }),
            ),
            Self::DuplicateKey => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "duplicate_key",
                    "message": "email already exists"
                }),
            ),
            Self::RouteNotFound => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": "endpoint not found"
                }),
            ),
            Self::NotReady => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({
                    "error": "service_unavailable",
                    "message": "database connection not established yet"
                }),
            ),
            Self::Storage(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                internal_body()
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                internal_body()
            }
        };

        (status, Json(body)).into_response()
    }
}

fn internal_body() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "error": "internal_error",
            "message": "an internal error occurred"
        }),
    )
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { id } => Self::NotFound { id },
            StoreError::DuplicateKey { constraint } => {
                tracing::debug!(%constraint, "unique constraint violated");
                Self::DuplicateKey
            }
            StoreError::NotReady => Self::NotReady,
            StoreError::Storage(_) => Self::Storage(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400_and_names_fields() {
        let err = ApiError::Validation(ValidationError::Missing {
            fields: vec!["lastname"],
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["fields"], json!(["lastname"]));
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::from(StoreError::NotFound { id: 7 }).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn duplicate_key_is_400() {
        let err = ApiError::from(StoreError::DuplicateKey {
            constraint: "users_email_key".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "duplicate_key");
    }

    #[tokio::test]
    async fn not_ready_is_503() {
        let response = ApiError::from(StoreError::NotReady).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn storage_error_does_not_leak_detail() {
        let err = ApiError::from(StoreError::Storage(sqlx::Error::Protocol(
            "relation \"users\" does not exist".into(),
        )));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "an internal error occurred");
        assert!(!body.to_string().contains("relation"));
    }

    #[tokio::test]
    async fn unknown_route_differs_from_missing_user() {
        let route = body_json(ApiError::RouteNotFound.into_response()).await;
        let user = body_json(ApiError::NotFound { id: 1 }.into_response()).await;
        assert_ne!(route["message"], user["message"]);
    }
}
