//! Shared utilities.

pub mod pixel;
pub mod token;
