//! Web front-end for the `pogoda` weather page.
//!
//! This crate adapts the core pipeline to axum:
//! - Single `/` endpoint accepting GET and POST
//! - `last_city` cookie handling
//! - HTML rendering of the forecast page

pub mod cookie;
pub mod handlers;
pub mod render;
pub mod router;

pub use handlers::AppState;
pub use router::create_router;
