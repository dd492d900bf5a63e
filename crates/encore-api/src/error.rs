//! Error types for the booking API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Store
//! failures convert via `From`, so handlers propagate with `?` and no
//! failure escapes to the client as anything but a JSON error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use encore_db::StoreError;

/// Errors that can occur in the booking API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A required field was missing or malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// A referenced record does not exist.
    #[error("integrity error: {0}")]
    Integrity(String),

    /// A UUID could not be parsed from the request path.
    #[error("invalid UUID: {0}")]
    InvalidUuid(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(msg) => Self::NotFound(msg),
            StoreError::Validation(msg) => Self::Validation(msg),
            StoreError::Integrity(msg) => Self::Integrity(msg),
            StoreError::Transaction(_) | StoreError::Migration(_) | StoreError::Config(_) => {
                // Driver/config detail stays in the log, not the response.
                tracing::error!(error = %error, "Store operation failed");
                Self::Internal("database operation failed".to_owned())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Validation(msg) | Self::InvalidUuid(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            Self::Integrity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = ApiError::NotFound("venue x".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let response = ApiError::Validation("name is required".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn integrity_maps_to_422() {
        let response = ApiError::Integrity("artist missing".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn transaction_error_maps_to_500() {
        let api_error: ApiError = StoreError::Transaction(sqlx_rowless_error()).into();
        let response = api_error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn store_not_found_keeps_its_message() {
        let api_error: ApiError = StoreError::NotFound("venue 42".to_owned()).into();
        assert!(matches!(api_error, ApiError::NotFound(msg) if msg == "venue 42"));
    }

    /// A stand-in sqlx error for conversion tests.
    fn sqlx_rowless_error() -> sqlx::Error {
        sqlx::Error::RowNotFound
    }
}
