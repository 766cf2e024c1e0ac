use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use std::path::Path;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::app_state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: String,
    legacy_pages: String,
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "health",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse),
        (status = 503, description = "Legacy pages directory unavailable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    if check_legacy_pages(state.pages.root()).await {
        info!("Health check passed");
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "OK".to_string(),
                legacy_pages: "available".to_string(),
            }),
        )
    } else {
        error!(
            "Legacy pages directory {} is missing",
            state.pages.root().display()
        );
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "UNAVAILABLE".to_string(),
                legacy_pages: "missing".to_string(),
            }),
        )
    }
}

async fn check_legacy_pages(root: &Path) -> bool {
    tokio::fs::metadata(root)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}
