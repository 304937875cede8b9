//! Route table

use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{health_check, list_pricing_plans, list_testimonials, submit_contact};
use crate::state::AppState;

/// Build the application router
///
/// Anything not matched by an API route is served from `static_dir`.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        // Landing content
        .route("/api/testimonials", get(list_testimonials))
        .route("/api/pricing-plans", get(list_pricing_plans))
        .route("/api/contact", post(submit_contact))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
