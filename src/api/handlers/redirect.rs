//! Handler for tokenized redirect traversal.

use axum::{
    extract::{ConnectInfo, Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;

/// Optional correlation identifiers carried by a tracked link.
#[derive(Debug, Deserialize)]
pub struct ClickParams {
    pub tid: Option<String>,
    pub mid: Option<String>,
}

/// Resolves a token, records a CLICK event, and redirects.
///
/// # Endpoint
///
/// `GET /r/{token}?tid={tid}&mid={mid}`
///
/// tid/mid are pass-through correlation data; either or both may be absent.
/// Unknown tokens return 404 and record nothing.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Query(params): Query<ClickParams>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let url = state
        .tracking_service
        .resolve_and_record_click(
            &token,
            params.tid,
            params.mid,
            Some(addr.ip().to_string()),
        )
        .await?;

    // 302 specifically: tracked links are shared and re-fetched, and some
    // mail clients refuse to follow 307/308 from link decorators.
    Ok((StatusCode::FOUND, [(header::LOCATION, url)]))
}
