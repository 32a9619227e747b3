//! Tracking engine orchestrating the signer, link store, and event log.

use std::sync::Arc;

use crate::application::services::RequestSigner;
use crate::domain::entities::TrackingEvent;
use crate::domain::repositories::{EventRepository, LinkRepository};
use crate::error::AppError;
use crate::utils::token::generate_token;
use serde_json::json;

/// Maximum token regeneration attempts before giving up on creation.
const MAX_TOKEN_ATTEMPTS: usize = 10;

/// Service composing the core tracking operations.
///
/// Stateless per request; all shared state lives behind the injected
/// repositories. Unverified pixel requests and unknown tokens never reach
/// the event log.
pub struct TrackingService {
    links: Arc<dyn LinkRepository>,
    events: Arc<dyn EventRepository>,
    signer: RequestSigner,
}

impl TrackingService {
    /// Creates a new tracking service over the given stores and signer.
    pub fn new(
        links: Arc<dyn LinkRepository>,
        events: Arc<dyn EventRepository>,
        signer: RequestSigner,
    ) -> Self {
        Self {
            links,
            events,
            signer,
        }
    }

    /// Records an OPEN event for a signed pixel fetch.
    ///
    /// All of `tid`, `mid`, and `sig` must be present and non-empty, and
    /// `sig` must verify against the (tid, mid) pair. On success exactly one
    /// OPEN event is appended; on any failure the log is left untouched.
    ///
    /// # Errors
    ///
    /// - [`AppError::MissingParameters`] when a required field is absent or empty
    /// - [`AppError::InvalidSignature`] on signature mismatch
    /// - [`AppError::Storage`] when the append fails
    pub async fn record_open(
        &self,
        tid: Option<&str>,
        mid: Option<&str>,
        sig: Option<&str>,
        ip: Option<String>,
    ) -> Result<(), AppError> {
        let (Some(tid), Some(mid), Some(sig)) = (
            non_empty(tid),
            non_empty(mid),
            non_empty(sig),
        ) else {
            return Err(AppError::missing_parameters("Missing parameters", json!({})));
        };

        if !self.signer.verify(sig, &[tid, mid]) {
            // Routine occurrence (stale or tampered link), not a fault.
            tracing::debug!(tid, mid, "Rejected pixel request with invalid signature");
            return Err(AppError::invalid_signature("Invalid signature", json!({})));
        }

        self.events
            .append(TrackingEvent::open(tid.to_string(), mid.to_string(), ip))
            .await?;

        tracing::debug!(tid, mid, "Recorded OPEN event");
        Ok(())
    }

    /// Resolves a token and records a CLICK event.
    ///
    /// `tid`/`mid` are optional pass-through correlation data from the
    /// tracked link; absence of either is valid and recorded as absent.
    /// Returns the destination URL for the boundary to redirect to.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] for an unknown token (nothing is appended)
    /// - [`AppError::Storage`] on store failures
    pub async fn resolve_and_record_click(
        &self,
        token: &str,
        tid: Option<String>,
        mid: Option<String>,
        ip: Option<String>,
    ) -> Result<String, AppError> {
        let Some(url) = self.links.resolve(token).await? else {
            tracing::debug!(token, "Redirect requested for unknown token");
            return Err(AppError::not_found("Unknown link", json!({ "token": token })));
        };

        self.events
            .append(TrackingEvent::click(
                token.to_string(),
                url.clone(),
                tid,
                mid,
                ip,
            ))
            .await?;

        tracing::debug!(token, "Recorded CLICK event");
        Ok(url)
    }

    /// Creates a tokenized redirect for `url` and returns the new token.
    ///
    /// Tokens are 8 hex characters from 4 random bytes. Generation retries
    /// on collision up to [`MAX_TOKEN_ATTEMPTS`] times; the bind-if-absent
    /// insert guarantees an existing binding is never overwritten.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] when `url` is empty
    /// - [`AppError::Storage`] when the insert fails or attempts are exhausted
    pub async fn create_link(&self, url: &str) -> Result<String, AppError> {
        if url.trim().is_empty() {
            return Err(AppError::bad_request("Missing url", json!({})));
        }

        for _ in 0..MAX_TOKEN_ATTEMPTS {
            let token = generate_token();

            if self.links.insert(&token, url).await? {
                tracing::debug!(token, "Created tracked link");
                return Ok(token);
            }
        }

        Err(AppError::storage(
            "Failed to generate unique token",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
