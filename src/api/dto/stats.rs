//! DTOs for the per-campaign stats endpoint.

use crate::application::services::EventCounts;
use serde::Serialize;

/// Aggregate counts for one correlation identifier.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub tid: String,
    pub stats: EventCounts,
}
