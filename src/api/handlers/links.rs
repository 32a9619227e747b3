//! Handler for tracked link creation.

use axum::{Json, extract::State};

use crate::api::dto::create_link::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a tokenized redirect for a destination URL.
///
/// # Endpoint
///
/// `POST /api/createLink`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/landing" }
/// ```
///
/// # Response
///
/// ```json
/// { "token": "a1b2c3d4" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when `url` is missing or empty.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<Json<CreateLinkResponse>, AppError> {
    let token = state.tracking_service.create_link(&payload.url).await?;

    Ok(Json(CreateLinkResponse { token }))
}
