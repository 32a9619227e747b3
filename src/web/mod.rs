//! Web dashboard layer for browser-based viewing.
//!
//! Pure presentation glue over the recent events feed; renders HTML with
//! Askama templates and contains no tracking logic of its own.

pub mod handlers;
pub mod routes;
