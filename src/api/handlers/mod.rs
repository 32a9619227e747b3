//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod events;
pub mod health;
pub mod links;
pub mod pixel;
pub mod redirect;
pub mod stats;

pub use events::events_handler;
pub use health::health_handler;
pub use links::create_link_handler;
pub use pixel::pixel_handler;
pub use redirect::redirect_handler;
pub use stats::stats_handler;
