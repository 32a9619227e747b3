//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{StatsService, TrackingService};

/// Shared state constructed once at startup and cloned into handlers.
///
/// The services hold the shared stores behind trait objects, so the same
/// state shape serves both the in-memory and the PostgreSQL backend.
#[derive(Clone)]
pub struct AppState {
    pub tracking_service: Arc<TrackingService>,
    pub stats_service: Arc<StatsService>,
    /// Backend name reported by the health endpoint (`memory` / `postgres`).
    pub storage_backend: &'static str,
    /// Default number of events returned by the feed and the dashboard.
    pub event_limit: i64,
}

impl AppState {
    pub fn new(
        tracking_service: Arc<TrackingService>,
        stats_service: Arc<StatsService>,
        storage_backend: &'static str,
        event_limit: i64,
    ) -> Self {
        Self {
            tracking_service,
            stats_service,
            storage_backend,
            event_limit,
        }
    }
}
