//! Infrastructure layer providing the storage backends.
//!
//! Two interchangeable implementations of the domain repository traits:
//!
//! - [`memory`] - process-local synchronized collections, used when no
//!   database is configured and throughout the test suite
//! - [`persistence`] - PostgreSQL via SQLx, used when `DATABASE_URL` is set
//!
//! Selection happens once at startup in [`crate::server::run`]; the rest of
//! the system only sees the traits.

pub mod memory;
pub mod persistence;
