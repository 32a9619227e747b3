//! Business logic services for the application layer.

pub mod signer;
pub mod stats_service;
pub mod tracking_service;

pub use signer::RequestSigner;
pub use stats_service::{EventCounts, StatsService};
pub use tracking_service::TrackingService;
