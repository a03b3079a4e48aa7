//! Axum router: maps all URL paths to handlers.

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    services::ServeDir,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    pages::{home, about, services, not_found},
    technologies::{technologies_page, technologies_legacy_path, roadmap_page},
    feedback::{feedback_page, feedback_submit},
    api::{api_technologies, api_technology_detail},
    system::health,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.site.static_dir.clone();
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",                   get(home))
        .route("/about",              get(about))
        .route("/services",           get(services))
        .route("/technologies",       get(technologies_page))
        .route("/Technologies",       get(technologies_legacy_path))
        .route("/technologies/{id}",  get(roadmap_page))
        .route("/feedback",           get(feedback_page).post(feedback_submit))

        // API endpoints
        .route("/api/technologies",      get(api_technologies))
        .route("/api/technologies/{id}", get(api_technology_detail))
        .route("/health",                get(health))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)

        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
