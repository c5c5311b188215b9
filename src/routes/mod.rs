//! Axum router construction.
//!
//! [`build`] assembles the complete application router:
//! - Per-request trace-ID middleware
//! - Health / heartbeat route
//! - Static brochure pages
//! - The consultation form (GET + POST)

mod consultation;
mod health;
mod health_info;
mod pages;

use axum::{Router, middleware};

use crate::middleware::trace;
use crate::state::AppState;

// ── Router builder ────────────────────────────────────────────────────────────

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(pages::router())
        .merge(health_info::router())
        .merge(consultation::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            trace::trace_middleware,
        ))
        .with_state(state)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
