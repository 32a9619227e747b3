//! Repository trait for the append-only tracking event log.

use crate::domain::entities::TrackingEvent;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the tracking event log.
///
/// The log is append-only and ordered by arrival; no event is ever mutated
/// or removed. Appends from concurrent requests must neither lose nor
/// duplicate entries.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryEventRepository`] - process-local log
/// - [`crate::infrastructure::persistence::PgEventRepository`] - PostgreSQL
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Appends one event to the log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn append(&self, event: TrackingEvent) -> Result<(), AppError>;

    /// Returns all events whose `tid` equals the given correlation
    /// identifier, in insertion order. Used by the stats aggregation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_tid(&self, tid: &str) -> Result<Vec<TrackingEvent>, AppError>;

    /// Returns up to `limit` most recent events, newest first. Feeds the
    /// dashboard and the events API.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn recent(&self, limit: i64) -> Result<Vec<TrackingEvent>, AppError>;
}
