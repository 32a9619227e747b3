//! Template rendering handlers for the dashboard.

pub mod dashboard;

pub use dashboard::dashboard_handler;
