//! Handler for per-campaign aggregate counts.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns OPEN/CLICK counts for one correlation identifier.
///
/// # Endpoint
///
/// `GET /api/stats/{tid}`
///
/// # Response
///
/// ```json
/// { "tid": "campaign-1", "stats": { "OPEN": 2, "CLICK": 1 } }
/// ```
///
/// A tid with no recorded events yields zero counts rather than an error.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(tid): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.summarize(&tid).await?;

    Ok(Json(StatsResponse { tid, stats }))
}
