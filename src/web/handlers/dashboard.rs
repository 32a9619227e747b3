//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::entities::{EventKind, TrackingEvent};
use crate::error::AppError;
use crate::state::AppState;

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html` with the most recent tracking events,
/// newest first.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub events: Vec<EventRow>,
}

/// One pre-formatted table row. Absent fields render as empty cells.
pub struct EventRow {
    pub kind: &'static str,
    pub kind_class: &'static str,
    pub tid: String,
    pub mid: String,
    pub token: String,
    pub url: String,
    pub ip: String,
    pub created_at: String,
}

impl From<TrackingEvent> for EventRow {
    fn from(event: TrackingEvent) -> Self {
        Self {
            kind: event.kind.as_str(),
            kind_class: match event.kind {
                EventKind::Open => "open",
                EventKind::Click => "click",
            },
            tid: event.tid.unwrap_or_default(),
            mid: event.mid.unwrap_or_default(),
            token: event.token.unwrap_or_default(),
            url: event.url.unwrap_or_default(),
            ip: event.ip.unwrap_or_default(),
            created_at: event.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

/// Renders the dashboard page.
///
/// # Endpoint
///
/// `GET /dashboard`
pub async fn dashboard_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.stats_service.recent_events(state.event_limit).await?;

    Ok(DashboardTemplate {
        events: events.into_iter().map(EventRow::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_row_fills_absent_fields_with_empty_strings() {
        let row = EventRow::from(TrackingEvent::open(
            "campaign-1".to_string(),
            "m1".to_string(),
            None,
        ));

        assert_eq!(row.kind, "OPEN");
        assert_eq!(row.kind_class, "open");
        assert_eq!(row.tid, "campaign-1");
        assert_eq!(row.token, "");
        assert_eq!(row.url, "");
        assert_eq!(row.ip, "");
    }
}
