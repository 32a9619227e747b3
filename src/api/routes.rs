//! JSON API route configuration.

use crate::api::handlers::{create_link_handler, events_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /createLink`  - Create a tokenized redirect
/// - `GET  /stats/{tid}` - OPEN/CLICK counts for a correlation identifier
/// - `GET  /events`      - Recent events, newest first
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/createLink", post(create_link_handler))
        .route("/stats/{tid}", get(stats_handler))
        .route("/events", get(events_handler))
}
