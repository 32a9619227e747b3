//! Application layer services implementing the tracking engine.
//!
//! This layer orchestrates domain operations by coordinating the signer,
//! the link store, and the event log. Services consume repository traits and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::signer::RequestSigner`] - HMAC signing and verification
//! - [`services::tracking_service::TrackingService`] - opens, clicks, link creation
//! - [`services::stats_service::StatsService`] - per-campaign aggregation and recent events

pub mod services;
