//! HTTP API handlers.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::datastore::{BookWritePayload, CreateBookRequest, DatastoreClient};
use crate::error::{Result, ServiceError};

/// Application state shared with handlers.
///
/// Immutable after startup; cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Client for the downstream datastore service.
    pub datastore: DatastoreClient,
    /// Handle for rendering Prometheus metrics.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create new app state.
    pub fn new(datastore: DatastoreClient, metrics: PrometheusHandle) -> Self {
        Self { datastore, metrics }
    }
}

/// Check that an Authorization header is present.
///
/// The value is never validated here; it is forwarded opaquely to the
/// datastore, which performs the real check.
fn require_auth(headers: &HeaderMap) -> Result<&HeaderValue> {
    headers
        .get(header::AUTHORIZATION)
        .ok_or(ServiceError::MissingAuth)
}

/// Wrap a relayed datastore body as a JSON response.
fn relay_json(body: Vec<u8>) -> Response {
    (
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Health check handler - always returns an empty 200.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Readiness check handler - always returns an empty 200.
pub async fn readiness() -> impl IntoResponse {
    StatusCode::OK
}

/// Render Prometheus metrics in text exposition format.
pub async fn metrics_text(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics.render()
}

/// `GET /api/v1/book/` - list all books.
///
/// The datastore exposes no list endpoint, so this returns an empty
/// object without a downstream call.
pub async fn list_books(headers: HeaderMap) -> Result<Json<serde_json::Value>> {
    require_auth(&headers)?;
    Ok(Json(serde_json::json!({})))
}

/// `GET /api/v1/book/{id}` - fetch one book via the datastore.
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let auth = require_auth(&headers)?;
    let body = state.datastore.read(auth, &book_id).await?;
    Ok(relay_json(body))
}

/// `POST /api/v1/book/` - create a book via the datastore.
pub async fn create_book(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Response> {
    let auth = require_auth(&headers)?;
    let request = CreateBookRequest::from_body(&body)?;
    let payload = BookWritePayload::from(request);
    let body = state.datastore.write(auth, &payload).await?;
    Ok(relay_json(body))
}

/// `DELETE /api/v1/book/{id}` - delete a book via the datastore.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response> {
    let auth = require_auth(&headers)?;
    let body = state.datastore.delete(auth, &book_id).await?;
    Ok(relay_json(body))
}

#[cfg(test)]
pub(crate) fn test_state(config: &crate::config::Config) -> AppState {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let recorder = PrometheusBuilder::new().build_recorder();
    AppState::new(DatastoreClient::new(config), recorder.handle())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_auth_accepts_any_value() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("tok123"));

        assert!(require_auth(&headers).is_ok());
    }

    #[test]
    fn require_auth_rejects_missing_header() {
        let headers = HeaderMap::new();

        assert!(matches!(
            require_auth(&headers),
            Err(ServiceError::MissingAuth)
        ));
    }
}
