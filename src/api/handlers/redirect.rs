//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::{debug, info};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Responds with `302 Found` and the target in the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state
        .url_service
        .resolve(&alias)
        .await
        .inspect_err(|e| info!(alias = %alias, error = %e, "Failed to resolve alias"))?;

    debug!(alias = %alias, url = %target, "Url resolved");

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]))
}
