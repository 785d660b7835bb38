//! Unified error types for the book service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors from the datastore client.
#[derive(Error, Debug)]
pub enum DatastoreError {
    /// HTTP request to the datastore failed (connect, timeout, transport).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Datastore replied with a body that is not valid JSON.
    #[error("datastore {endpoint} returned a non-JSON body")]
    NonJsonResponse {
        /// The datastore endpoint that misbehaved.
        endpoint: &'static str,
    },
}

/// Request-level errors surfaced to the caller.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// No Authorization header on an authenticated route.
    #[error("missing auth")]
    MissingAuth,

    /// A required field is absent from the request body.
    #[error("missing field {0}")]
    MissingField(&'static str),

    /// Request body is not a JSON object.
    #[error("malformed request body")]
    MalformedBody,

    /// Downstream datastore call failed.
    #[error("datastore error: {0}")]
    Datastore(#[from] DatastoreError),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::MissingAuth => (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "missing auth"})),
            )
                .into_response(),
            // The original service replied 200 here; the body is kept for
            // compatibility but the status is corrected to 400.
            ServiceError::MissingField(_) | ServiceError::MalformedBody => (
                StatusCode::BAD_REQUEST,
                Json(json!({"message": "error reading arguments"})),
            )
                .into_response(),
            ServiceError::Datastore(e) => {
                error!("datastore call failed: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({"error": "datastore unavailable"})),
                )
                    .into_response()
            }
        }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_auth_maps_to_401() {
        let response = ServiceError::MissingAuth.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn missing_field_maps_to_400() {
        let response = ServiceError::MissingField("Author").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn malformed_body_maps_to_400() {
        let response = ServiceError::MalformedBody.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn datastore_error_maps_to_502() {
        let response = ServiceError::Datastore(DatastoreError::NonJsonResponse {
            endpoint: "read",
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
