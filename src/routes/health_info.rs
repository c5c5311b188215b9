//! Health-information page: a fixed list of article summaries.


use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use minijinja::context;

use crate::error::ServerError;
use crate::models::health_articles;
use crate::state::AppState;
use crate::templates;

/// Register the health-info route.
pub fn router() -> Router<AppState> {
    Router::new().route("/health-info", get(health_info))
}

pub async fn health_info(State(state): State<AppState>) -> Result<Html<String>, ServerError> {
    templates::render(
        &state.templates,
        "health_info.html",
        context! { articles => health_articles() },
    )
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use crate::routes::test_support::app;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn page_lists_all_four_articles() {
        let (router, _state) = app();
        let response = router
            .oneshot(Request::get("/health-info").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8_lossy(&bytes);
        assert_eq!(body.matches("class=\"article\"").count(), 4);
        for category in ["pregnancy", "postpartum", "breastfeeding", "womens_health"] {
            assert!(body.contains(category), "missing category {category}");
        }
    }
}
