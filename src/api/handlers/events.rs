//! Handler for the recent events feed.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::events::{EventInfo, EventsQuery, EventsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Upper bound on the events returned in one response.
const MAX_LIMIT: i64 = 1000;

/// Lists recent tracking events, newest first.
///
/// # Endpoint
///
/// `GET /api/events?limit={limit}`
///
/// `limit` defaults to the configured dashboard limit and is clamped to
/// `1..=1000`.
pub async fn events_handler(
    State(state): State<AppState>,
    Query(params): Query<EventsQuery>,
) -> Result<Json<EventsResponse>, AppError> {
    let limit = params.limit.unwrap_or(state.event_limit).clamp(1, MAX_LIMIT);

    let events = state.stats_service.recent_events(limit).await?;

    Ok(Json(EventsResponse {
        items: events.into_iter().map(EventInfo::from).collect(),
    }))
}
