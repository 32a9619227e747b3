//! Top-level router configuration combining tracking, API, and web routes.
//!
//! # Route Structure
//!
//! - `GET  /s/pixel`     - Signed tracking pixel (records OPEN)
//! - `GET  /r/{token}`   - Tokenized redirect (records CLICK)
//! - `GET  /health`      - Health check
//! - `/api/*`            - JSON API (create link, stats, events)
//! - `/dashboard`        - HTML view of recent events
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, pixel_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/s/pixel", get(pixel_handler))
        .route("/r/{token}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .nest("/dashboard", web::routes::routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
