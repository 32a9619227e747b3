//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Every logical operation executes as a single statement; no
//! multi-statement transactions are needed because no operation here
//! reads-then-conditionally-writes the same row (token binding uses
//! `ON CONFLICT DO NOTHING` to stay atomic).
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - token-to-URL bindings in `redirects`
//! - [`PgEventRepository`] - append-only log in `events`

pub mod pg_event_repository;
pub mod pg_link_repository;

pub use pg_event_repository::PgEventRepository;
pub use pg_link_repository::PgLinkRepository;
