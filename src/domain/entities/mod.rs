//! Core domain entities representing the tracking data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`TrackingEvent`] - An immutable OPEN or CLICK occurrence
//! - [`EventKind`] - Discriminator between pixel opens and redirect clicks
//!
//! Link bindings are a pure token-to-URL mapping and are represented
//! directly by the [`crate::domain::repositories::LinkRepository`] contract
//! rather than a dedicated entity.

pub mod event;

pub use event::{EventKind, TrackingEvent};
