//! In-memory implementation of the event log.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::entities::TrackingEvent;
use crate::domain::repositories::EventRepository;
use crate::error::AppError;

/// Process-local append-only event log, ordered by arrival.
#[derive(Default)]
pub struct MemoryEventRepository {
    events: RwLock<Vec<TrackingEvent>>,
}

impl MemoryEventRepository {
    /// Creates an empty event log.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for MemoryEventRepository {
    async fn append(&self, event: TrackingEvent) -> Result<(), AppError> {
        let mut events = self.events.write().expect("event log lock poisoned");
        events.push(event);
        Ok(())
    }

    async fn find_by_tid(&self, tid: &str) -> Result<Vec<TrackingEvent>, AppError> {
        let events = self.events.read().expect("event log lock poisoned");
        Ok(events
            .iter()
            .filter(|e| e.tid.as_deref() == Some(tid))
            .cloned()
            .collect())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<TrackingEvent>, AppError> {
        let events = self.events.read().expect("event log lock poisoned");
        Ok(events
            .iter()
            .rev()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(tid: &str, mid: &str) -> TrackingEvent {
        TrackingEvent::open(tid.to_string(), mid.to_string(), None)
    }

    #[tokio::test]
    async fn test_append_and_find_by_tid() {
        let repo = MemoryEventRepository::new();

        repo.append(open("campaign-1", "m1")).await.unwrap();
        repo.append(open("campaign-2", "m2")).await.unwrap();
        repo.append(open("campaign-1", "m3")).await.unwrap();

        let found = repo.find_by_tid("campaign-1").await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].mid.as_deref(), Some("m1"));
        assert_eq!(found[1].mid.as_deref(), Some("m3"));
    }

    #[tokio::test]
    async fn test_find_by_tid_ignores_events_without_tid() {
        let repo = MemoryEventRepository::new();

        repo.append(TrackingEvent::click(
            "a1b2c3d4".to_string(),
            "https://example.com".to_string(),
            None,
            None,
            None,
        ))
        .await
        .unwrap();

        assert!(repo.find_by_tid("campaign-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_recent_is_newest_first_and_limited() {
        let repo = MemoryEventRepository::new();

        for i in 0..5 {
            repo.append(open("campaign", &format!("m{i}"))).await.unwrap();
        }

        let recent = repo.recent(3).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].mid.as_deref(), Some("m4"));
        assert_eq!(recent[2].mid.as_deref(), Some("m2"));
    }
}
