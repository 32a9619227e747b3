//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::dashboard_handler;
use axum::{Router, routing::get};

/// Dashboard routes, nested under `/dashboard`.
///
/// # Endpoints
///
/// - `GET /` - Recent events table
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard_handler))
}
