//! Consultation form: GET renders, POST validates and stores.
//!
//! Accepted submissions follow the post/redirect/get pattern: the record is
//! appended, a one-time acknowledgement is queued in a signed cookie, and the
//! client is redirected back to an empty form. Rejected submissions re-render
//! the form with the entered values and per-field error text.


use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Form;
use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::Cookie;
use minijinja::context;
use tracing::info;

use crate::error::ServerError;
use crate::forms::{ConsultationForm, FieldErrors};
use crate::models::Category;
use crate::state::AppState;
use crate::templates;

const FLASH_COOKIE: &str = "flash";
const ACK_MESSAGE: &str =
    "Thank you for your consultation request. One of our midwives will contact you within 24 hours.";

/// Register the consultation routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/consultation", get(show_form).post(submit))
}

/// Render the empty form, consuming a pending flash message if one was
/// queued by a successful submission. The signature check means a forged
/// cookie is simply ignored.
pub async fn show_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), ServerError> {
    let flash = jar.get(FLASH_COOKIE).map(|c| c.value().to_owned());
    let jar = if flash.is_some() {
        let mut expired = Cookie::from(FLASH_COOKIE);
        expired.set_path("/");
        jar.remove(expired)
    } else {
        jar
    };

    let html = render_form(&state, &ConsultationForm::default(), &FieldErrors::new(), flash)?;
    Ok((jar, html))
}

/// Validate a submission. On success append exactly one record and redirect;
/// on failure nothing is stored and the form is re-rendered inline.
pub async fn submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<ConsultationForm>,
) -> Result<Response, ServerError> {
    match form.clone().into_submission() {
        Ok(submission) => {
            let id = state.store.append(submission);
            info!(id, "consultation accepted");

            let flash = Cookie::build((FLASH_COOKIE, ACK_MESSAGE))
                .path("/")
                .http_only(true);
            Ok((jar.add(flash), Redirect::to("/consultation")).into_response())
        }
        Err(errors) => {
            let html = render_form(&state, &form, &errors, None)?;
            Ok(html.into_response())
        }
    }
}

fn render_form(
    state: &AppState,
    form: &ConsultationForm,
    errors: &FieldErrors,
    flash: Option<String>,
) -> Result<Html<String>, ServerError> {
    templates::render(
        &state.templates,
        "consultation.html",
        context! {
            form => form,
            errors => errors,
            categories => Category::choices(),
            flash => flash,
        },
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────────
