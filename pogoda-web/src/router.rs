//! Router configuration: one page, plus request tracing middleware.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{self, AppState};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::weather_page).post(handlers::weather_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
