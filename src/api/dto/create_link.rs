//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};

/// Request to create a tokenized redirect.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    /// Destination URL. Must be non-empty; the service deliberately does not
    /// validate URL structure beyond that.
    #[serde(default)]
    pub url: String,
}

/// Response carrying the newly issued token.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub token: String,
}
