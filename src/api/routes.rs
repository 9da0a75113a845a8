//! API route configuration.

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Link management routes.
///
/// # Endpoints
///
/// - `POST   /url`          - Create a short link
/// - `DELETE /url/{alias}`  - Delete a short link
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/{alias}", delete(delete_handler))
}
