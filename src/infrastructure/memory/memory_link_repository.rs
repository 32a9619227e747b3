//! In-memory implementation of the link store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Process-local token-to-URL map.
///
/// The entry-based insert makes bind-if-absent atomic under the write lock,
/// so concurrent creates with a colliding token cannot overwrite each other.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, String>>,
}

impl MemoryLinkRepository {
    /// Creates an empty link store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, token: &str, url: &str) -> Result<bool, AppError> {
        let mut links = self.links.write().expect("link store lock poisoned");

        match links.entry(token.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(entry) => {
                entry.insert(url.to_string());
                Ok(true)
            }
        }
    }

    async fn resolve(&self, token: &str) -> Result<Option<String>, AppError> {
        let links = self.links.read().expect("link store lock poisoned");
        Ok(links.get(token).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_resolve() {
        let repo = MemoryLinkRepository::new();

        assert!(repo.insert("a1b2c3d4", "https://example.com").await.unwrap());
        assert_eq!(
            repo.resolve("a1b2c3d4").await.unwrap(),
            Some("https://example.com".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_unknown_token() {
        let repo = MemoryLinkRepository::new();
        assert_eq!(repo.resolve("missing1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_does_not_overwrite() {
        let repo = MemoryLinkRepository::new();

        assert!(repo.insert("a1b2c3d4", "https://first.example").await.unwrap());
        assert!(!repo.insert("a1b2c3d4", "https://second.example").await.unwrap());

        assert_eq!(
            repo.resolve("a1b2c3d4").await.unwrap(),
            Some("https://first.example".to_string())
        );
    }
}
