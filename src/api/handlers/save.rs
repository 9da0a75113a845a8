//! Handler for the link creation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use tracing::info;
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/a",
///   "alias": "custom"   // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "id": 1, "alias": "custom", "url": "https://example.com/a" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL or alias is invalid.
/// Returns 409 Conflict if the alias is already taken.
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    payload.validate()?;

    let mapping = state
        .url_service
        .shorten(&payload.url, payload.alias.as_deref())
        .await
        .inspect_err(|e| info!(url = %payload.url, error = %e, "Failed to add url"))?;

    info!(id = mapping.id, alias = %mapping.alias, "Url added");

    Ok((
        StatusCode::CREATED,
        Json(SaveResponse {
            id: mapping.id,
            alias: mapping.alias,
            url: mapping.target,
        }),
    ))
}
