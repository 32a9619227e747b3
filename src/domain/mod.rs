//! Domain layer containing the core tracking data model.
//!
//! Defines entities and repository traits independent of infrastructure
//! concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (tracking events, link bindings)
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure
//!   layer (in-memory and PostgreSQL backends are interchangeable)
//! - Business logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
