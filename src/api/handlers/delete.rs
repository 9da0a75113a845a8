//! Handler for link deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// Permanently deletes a short link.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// Responds with `204 No Content`. The alias becomes available again.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist, including when it was
/// already deleted.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state
        .url_service
        .remove(&alias)
        .await
        .inspect_err(|e| info!(alias = %alias, error = %e, "Failed to delete url"))?;

    info!(alias = %alias, "Url deleted");

    Ok(StatusCode::NO_CONTENT)
}
