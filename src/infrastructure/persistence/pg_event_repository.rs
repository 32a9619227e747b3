//! PostgreSQL implementation of the event log.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::sync::Arc;

use crate::domain::entities::{EventKind, TrackingEvent};
use crate::domain::repositories::EventRepository;
use crate::error::AppError;
use serde_json::json;

/// PostgreSQL repository for the append-only tracking event log.
///
/// Insertion order is preserved by the `id` sequence; queries order by it
/// rather than by timestamp, matching the log's arrival-order guarantee.
pub struct PgEventRepository {
    pool: Arc<PgPool>,
}

impl PgEventRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn row_to_event(row: &PgRow) -> Result<TrackingEvent, AppError> {
    let kind_raw: String = row.try_get("type")?;
    let kind = EventKind::parse(&kind_raw).ok_or_else(|| {
        AppError::storage("Unknown event type in store", json!({ "type": kind_raw }))
    })?;

    Ok(TrackingEvent {
        kind,
        tid: row.try_get("tid")?,
        mid: row.try_get("mid")?,
        token: row.try_get("token")?,
        url: row.try_get("url")?,
        ip: row.try_get("ip")?,
        created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
    })
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn append(&self, event: TrackingEvent) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO events (type, tid, mid, token, url, ip, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(event.kind.as_str())
        .bind(&event.tid)
        .bind(&event.mid)
        .bind(&event.token)
        .bind(&event.url)
        .bind(&event.ip)
        .bind(event.created_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn find_by_tid(&self, tid: &str) -> Result<Vec<TrackingEvent>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT type, tid, mid, token, url, ip, created_at
            FROM events
            WHERE tid = $1
            ORDER BY id
            "#,
        )
        .bind(tid)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter().map(row_to_event).collect()
    }

    async fn recent(&self, limit: i64) -> Result<Vec<TrackingEvent>, AppError> {
        let rows = sqlx::query(
            r#"
            SELECT type, tid, mid, token, url, ip, created_at
            FROM events
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.iter().map(row_to_event).collect()
    }
}
