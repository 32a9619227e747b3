//! DTOs for the health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Active storage backend (`memory` or `postgres`).
    pub storage: &'static str,
}
