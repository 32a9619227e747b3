//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the two shared mutable stores of the system: the
//! link store (token to URL mapping) and the append-only event log. They are
//! implemented twice in `crate::infrastructure`, over in-process synchronized
//! collections and over PostgreSQL, and the rest of the system is written
//! against the traits only.
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` for unit tests.

pub mod event_repository;
pub mod link_repository;

pub use event_repository::EventRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use event_repository::MockEventRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
