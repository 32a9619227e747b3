//! DTOs for the recent events feed.

use crate::domain::entities::TrackingEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Query parameters for the events feed.
#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    /// Maximum number of events to return, newest first.
    pub limit: Option<i64>,
}

/// A single event as exposed by the feed.
#[derive(Debug, Serialize)]
pub struct EventInfo {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub tid: Option<String>,
    pub mid: Option<String>,
    pub token: Option<String>,
    pub url: Option<String>,
    pub ip: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<TrackingEvent> for EventInfo {
    fn from(event: TrackingEvent) -> Self {
        Self {
            kind: event.kind.as_str(),
            tid: event.tid,
            mid: event.mid,
            token: event.token,
            url: event.url,
            ip: event.ip,
            created_at: event.created_at,
        }
    }
}

/// Response wrapping the ordered event sequence.
#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub items: Vec<EventInfo>,
}
