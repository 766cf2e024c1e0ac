use axum::{Router, body::Body, http::Response};
use serde_json::Value;

use pagelift::{app_state::AppState, pages::LegacyPageStore, routes};

pub const FIXTURE_ROOT: &str = "tests/fixtures/app";

pub fn test_app() -> Router {
    test_app_with_root(FIXTURE_ROOT)
}

pub fn test_app_with_root(root: &str) -> Router {
    routes::router(AppState::new(LegacyPageStore::new(root)))
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
