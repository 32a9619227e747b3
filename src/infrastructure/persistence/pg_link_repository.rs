//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for tokenized redirect targets.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, token: &str, url: &str) -> Result<bool, AppError> {
        // ON CONFLICT DO NOTHING keeps bind-if-absent a single atomic
        // statement; a colliding token leaves the existing binding intact.
        let result = sqlx::query(
            "INSERT INTO redirects (token, url) VALUES ($1, $2) ON CONFLICT (token) DO NOTHING",
        )
        .bind(token)
        .bind(url)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn resolve(&self, token: &str) -> Result<Option<String>, AppError> {
        let url: Option<String> =
            sqlx::query_scalar("SELECT url FROM redirects WHERE token = $1")
                .bind(token)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(url)
    }
}
