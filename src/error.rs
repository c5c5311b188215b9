//! Unified server error type.
//!
//! Page handlers return `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to an HTTP response with an appropriate status code.
//!
//! Form validation failures are *not* represented here: they are captured
//! per-request and re-rendered inline next to the offending field, never
//! surfaced as server faults.
//!
//! **Security note:** Internal errors are logged with full detail but only a
//! generic message is returned to the caller so that template names or other
//! implementation details never leak to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// All errors that can occur in the midwife-web request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A template failed to render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// An unclassified internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            ServerError::Template(e) => {
                error!(error = %e, "template rendering failed");
            }
            ServerError::Internal(m) => {
                error!(message = %m, "internal server error");
            }
        }
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(e: anyhow::Error) -> Self {
        // Log the full error chain before discarding it so that diagnostic
        // detail is preserved in the server logs even though clients only see
        // a generic message.
        error!(error = ?e, "converting anyhow error to ServerError::Internal");
        ServerError::Internal(e.to_string())
    }
}
