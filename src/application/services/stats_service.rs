//! Read-side projection over the tracking event log.

use std::sync::Arc;

use crate::domain::entities::{EventKind, TrackingEvent};
use crate::domain::repositories::EventRepository;
use crate::error::AppError;
use serde::Serialize;

/// Per-campaign event counts.
///
/// Always a complete two-key mapping; a tid with no events yields zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventCounts {
    #[serde(rename = "OPEN")]
    pub open: i64,
    #[serde(rename = "CLICK")]
    pub click: i64,
}

/// Service computing aggregate counts and the recent events feed.
///
/// Aggregation recomputes on every call with no caching. Acceptable at the
/// expected query volume; a materialized counter is the natural next step
/// if event volume grows.
pub struct StatsService {
    events: Arc<dyn EventRepository>,
}

impl StatsService {
    /// Creates a new stats service over the event log.
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    /// Counts OPEN and CLICK events for one correlation identifier.
    ///
    /// An unknown or empty `tid` is not an error; it simply yields zero
    /// counts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn summarize(&self, tid: &str) -> Result<EventCounts, AppError> {
        let events = self.events.find_by_tid(tid).await?;

        let mut counts = EventCounts { open: 0, click: 0 };
        for event in &events {
            match event.kind {
                EventKind::Open => counts.open += 1,
                EventKind::Click => counts.click += 1,
            }
        }

        Ok(counts)
    }

    /// Returns up to `limit` most recent events, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn recent_events(&self, limit: i64) -> Result<Vec<TrackingEvent>, AppError> {
        self.events.recent(limit).await
    }
}
