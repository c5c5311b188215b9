//! Static brochure pages: home, about, contact.


use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use minijinja::context;

use crate::error::ServerError;
use crate::state::AppState;
use crate::templates;

/// Register the static page routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/contact", get(contact))
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    templates::render(&state.templates, "index.html", context! {})
}

pub async fn about(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    templates::render(&state.templates, "about.html", context! {})
}

pub async fn contact(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    templates::render(&state.templates, "contact.html", context! {})
}

// ── Tests ──────────────────────────────────────────────────────────────────────
