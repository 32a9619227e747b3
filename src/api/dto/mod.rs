//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization.

pub mod create_link;
pub mod events;
pub mod health;
pub mod stats;
