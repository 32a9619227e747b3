//! In-memory repository implementations.
//!
//! Bindings and events live for the process lifetime. Both repositories are
//! internally synchronized and safe under concurrent request handling.

pub mod memory_event_repository;
pub mod memory_link_repository;

pub use memory_event_repository::MemoryEventRepository;
pub use memory_link_repository::MemoryLinkRepository;
