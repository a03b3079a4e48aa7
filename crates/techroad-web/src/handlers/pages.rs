//! Informational pages: home, about, services, and the 404 page.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use minijinja::context;

use crate::content;
use crate::error::ApiError;
use crate::state::{AppState, SharedState};

pub async fn home(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    state.templates.page("home.html", context! {
        active => "home",
        hero_technologies => content::HERO_TECHNOLOGIES,
        stats => content::HERO_STATS,
        features => content::FEATURES,
        steps => content::STEPS,
        testimonials => content::TESTIMONIALS,
    })
}

pub async fn about(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    state.templates.page("about.html", context! {
        active => "about",
        stats => content::ABOUT_STATS,
        values => content::VALUES,
        team => content::TEAM,
        milestones => content::MILESTONES,
    })
}

pub async fn services(State(state): State<SharedState>) -> Result<Html<String>, ApiError> {
    state.templates.page("services.html", context! {
        active => "services",
        services => content::SERVICES,
        pricing => content::PRICING,
        faqs => content::FAQS,
    })
}

/// Render the 404 page with the given explanation.
pub fn not_found_page(state: &AppState, message: &str) -> Result<Response, ApiError> {
    let html = state.templates.page("not_found.html", context! { message => message })?;
    Ok((StatusCode::NOT_FOUND, html).into_response())
}

/// Router fallback for unknown paths.
pub async fn not_found(State(state): State<SharedState>, uri: Uri) -> Result<Response, ApiError> {
    tracing::debug!(path = %uri.path(), "No route matched");
    not_found_page(&state, &format!("The page {} does not exist.", uri.path()))
}
