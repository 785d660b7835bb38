//! HTTP API route definitions.

use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_book, delete_book, get_book, health, list_books, metrics_text, readiness, AppState,
};
use crate::metrics;

/// Routes excluded from request metrics, matching the conventional
/// organization of probe and scrape endpoints.
const UNTRACKED_ROUTES: [&str; 3] = ["/health", "/readiness", "/metrics"];

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/book/", get(list_books).post(create_book))
        .route("/api/v1/book/:book_id", get(get_book).delete(delete_book))
        // Probe and scrape endpoints
        .route("/health", get(health))
        .route("/readiness", get(readiness))
        .route("/metrics", get(metrics_text))
        .layer(middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Record a request counter and latency histogram per matched route.
async fn track_metrics(req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());

    if UNTRACKED_ROUTES.contains(&route.as_str()) {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let start = Instant::now();
    let response = next.run(req).await;

    let status = response.status();
    if status == axum::http::StatusCode::UNAUTHORIZED {
        metrics::inc_auth_rejections(&route);
    }
    metrics::record_request(method.as_str(), &route, status.as_u16(), start);

    response
}
