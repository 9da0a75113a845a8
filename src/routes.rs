//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /url`          - Create a short link
//! - `DELETE /url/{alias}`  - Delete a short link
//! - `GET    /{alias}`      - Redirect to the target URL
//!
//! # Middleware (outermost first)
//!
//! - **Request id** - Assigns `x-request-id` and echoes it on the response
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Turns handler panics into 500 responses
//! - **Timeout** - Aborts requests that exceed the configured deadline (408)
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{request_id, tracing};
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower::{Layer, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Builds the routes and middleware stack without path normalization.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(api::routes::url_routes())
        .route("/{alias}", get(redirect_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(request_id::set_layer())
                .layer(tracing::layer())
                .layer(request_id::propagate_layer())
                .layer(CatchPanicLayer::new())
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    request_timeout,
                )),
        )
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}
