//! Tracking event entity for the append-only event log.

use chrono::{DateTime, Utc};

/// Kind of tracking occurrence.
///
/// `Open` is recorded when the tracking pixel is fetched with a valid
/// signature; `Click` when a tokenized redirect is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Open,
    Click,
}

impl EventKind {
    /// Wire/storage representation (`OPEN` / `CLICK`).
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Open => "OPEN",
            EventKind::Click => "CLICK",
        }
    }

    /// Parses the storage representation back into a kind.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "OPEN" => Some(EventKind::Open),
            "CLICK" => Some(EventKind::Click),
            _ => None,
        }
    }
}

/// A single tracking occurrence, immutable once appended to the event log.
///
/// OPEN events always carry `tid` and `mid` (they are required and
/// signature-verified before the event is recorded). CLICK events always
/// carry `token` and the resolved `url`; their `tid`/`mid` are optional
/// pass-through correlation data from the tracked link.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingEvent {
    pub kind: EventKind,
    pub tid: Option<String>,
    pub mid: Option<String>,
    pub token: Option<String>,
    pub url: Option<String>,
    pub ip: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TrackingEvent {
    /// Creates an OPEN event with the current timestamp.
    pub fn open(tid: String, mid: String, ip: Option<String>) -> Self {
        Self {
            kind: EventKind::Open,
            tid: Some(tid),
            mid: Some(mid),
            token: None,
            url: None,
            ip,
            created_at: Utc::now(),
        }
    }

    /// Creates a CLICK event with the current timestamp.
    pub fn click(
        token: String,
        url: String,
        tid: Option<String>,
        mid: Option<String>,
        ip: Option<String>,
    ) -> Self {
        Self {
            kind: EventKind::Click,
            tid,
            mid,
            token: Some(token),
            url: Some(url),
            ip,
            created_at: Utc::now(),
        }
    }
}
