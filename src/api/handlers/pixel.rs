//! Handler for the signed tracking pixel.

use axum::{
    extract::{ConnectInfo, Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::pixel::PIXEL_PNG;

/// Query parameters of a pixel request.
///
/// All three are required by the engine; they are optional here so that the
/// engine can distinguish missing parameters from an invalid signature.
#[derive(Debug, Deserialize)]
pub struct PixelParams {
    pub tid: Option<String>,
    pub mid: Option<String>,
    pub sig: Option<String>,
}

/// Serves the tracking pixel and records an OPEN event.
///
/// # Endpoint
///
/// `GET /s/pixel?tid={tid}&mid={mid}&sig={sig}`
///
/// The signature must be the HMAC of (tid, mid) under the shared secret.
/// Unverified requests produce no event and get a 400 response.
///
/// The no-cache headers are a functional requirement, not a nicety: mail
/// clients and proxies caching the pixel would suppress repeat opens.
pub async fn pixel_handler(
    State(state): State<AppState>,
    Query(params): Query<PixelParams>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    state
        .tracking_service
        .record_open(
            params.tid.as_deref(),
            params.mid.as_deref(),
            params.sig.as_deref(),
            Some(addr.ip().to_string()),
        )
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            (
                header::CACHE_CONTROL,
                "no-cache, no-store, must-revalidate, max-age=0",
            ),
            (header::PRAGMA, "no-cache"),
            (header::EXPIRES, "0"),
        ],
        PIXEL_PNG.clone(),
    ))
}
