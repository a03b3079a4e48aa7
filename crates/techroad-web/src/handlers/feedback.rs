//! Feedback form: GET renders it, POST validates and acknowledges.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use minijinja::context;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::feedback::{FeedbackForm, FeedbackType, FieldErrors, MAX_RATING};
use crate::state::SharedState;

#[derive(Debug, Serialize)]
struct TypeOption {
    id: &'static str,
    label: &'static str,
    description: &'static str,
    selected: bool,
}

fn render_form(
    state: &SharedState,
    form: &FeedbackForm,
    errors: &FieldErrors,
) -> Result<String, ApiError> {
    let selected_type = form.feedback_type();
    let types: Vec<TypeOption> = FeedbackType::ALL
        .into_iter()
        .map(|t| TypeOption {
            id: t.id(),
            label: t.label(),
            description: t.description(),
            selected: t == selected_type,
        })
        .collect();

    let error_map: BTreeMap<&'static str, &'static str> =
        errors.iter().map(|(field, msg)| (field.id(), msg)).collect();

    Ok(state.templates.render("feedback.html", context! {
        active => "feedback",
        submitted => false,
        form => form,
        types => types,
        rating => form.rating(),
        ratings => (1..=MAX_RATING).collect::<Vec<u8>>(),
        rating_required => selected_type != FeedbackType::Compliment,
        errors => error_map,
        focus => errors.first_field().map(|f| f.id()),
    })?)
}

/// GET /feedback
pub async fn feedback_page(State(state): State<SharedState>) -> Result<Response, ApiError> {
    let html = render_form(&state, &FeedbackForm::default(), &FieldErrors::default())?;
    Ok(Html(html).into_response())
}

/// POST /feedback
pub async fn feedback_submit(
    State(state): State<SharedState>,
    Form(form): Form<FeedbackForm>,
) -> Result<Response, ApiError> {
    match form.validate() {
        Ok(feedback) => {
            tracing::info!(
                name = %feedback.name,
                email = %feedback.email,
                feedback_type = feedback.feedback_type.id(),
                rating = ?feedback.rating,
                message = %feedback.message,
                "Feedback submitted"
            );
            let html = state.templates.page("feedback.html", context! {
                active => "feedback",
                submitted => true,
                name => &feedback.name,
                feedback_type => feedback.feedback_type.label(),
            })?;
            Ok(html.into_response())
        }
        Err(errors) => {
            tracing::debug!(invalid = errors.iter().count(), "Feedback rejected");
            let html = render_form(&state, &form, &errors)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
    }
}
