//! Repository trait for the token-to-URL link store.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for tokenized redirect targets.
///
/// The store is a pure key-value mapping with no secondary indices.
/// Bindings are created once and never updated or deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryLinkRepository`] - process-local map
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Binds `token` to `url` if and only if the token is not already bound.
    ///
    /// Returns `Ok(false)` when the token is taken, leaving the existing
    /// binding untouched. The check and the write are a single atomic
    /// operation in both implementations, so concurrent creates cannot
    /// silently overwrite each other.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn insert(&self, token: &str, url: &str) -> Result<bool, AppError>;

    /// Resolves a token to its destination URL.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the token is bound
    /// - `Ok(None)` if the token is unknown
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn resolve(&self, token: &str) -> Result<Option<String>, AppError>;
}
