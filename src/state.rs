//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::config::Config;
use crate::store::ConsultationStore;

/// State shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// In-memory consultation submissions, process lifetime only.
    pub store: Arc<ConsultationStore>,
    /// Compiled template environment.
    pub templates: Arc<minijinja::Environment<'static>>,
    /// Signing key for the one-time flash cookie.
    pub key: Key,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The signing key must never end up in logs.
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

// Lets `SignedCookieJar` pull its key straight out of the shared state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}
