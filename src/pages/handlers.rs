use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument, warn};

use crate::{
    app_state::AppState,
    extractor::extract,
    pages::{
        dtos::{ExtractErrorResponse, ExtractPageQuery, ExtractPageResponse},
        source::SourceError,
    },
};

#[utoipa::path(
    get,
    path = "/extract-page-data",
    tag = "pages",
    params(ExtractPageQuery),
    responses(
        (status = 200, description = "Page source read and processed", body = ExtractPageResponse),
        (status = 400, description = "Missing or malformed slug", body = ExtractErrorResponse),
        (status = 404, description = "No legacy page for this slug", body = ExtractErrorResponse),
        (status = 500, description = "Page source could not be read", body = ExtractErrorResponse)
    )
)]
#[instrument(skip_all, fields(slug = ?query.slug))]
pub async fn extract_page_data(
    State(state): State<AppState>,
    Query(query): Query<ExtractPageQuery>,
) -> Response {
    let slug = match query.validate() {
        Ok(slug) => slug,
        Err(error) => {
            return (StatusCode::BAD_REQUEST, Json(ExtractErrorResponse::new(error))).into_response();
        }
    };

    let source = match state.pages.read(slug).await {
        Ok(source) => source,
        Err(SourceError::InvalidSlug(_)) => {
            warn!("Rejected malformed slug {:?}", slug);
            return (
                StatusCode::BAD_REQUEST,
                Json(ExtractErrorResponse::new("Slug must be a plain page identifier")),
            )
                .into_response();
        }
        Err(SourceError::NotFound) => {
            info!("No legacy page for slug {}", slug);
            return (StatusCode::NOT_FOUND, Json(ExtractErrorResponse::not_found())).into_response();
        }
        Err(e) => {
            error!("Failed to read legacy page {}: {}", slug, e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ExtractErrorResponse::new(e.to_string())),
            )
                .into_response();
        }
    };

    let result = extract(slug, &source);
    let diag = &result.diagnostics;
    info!(
        "Extracted {} (subtitle: {}, avatar: {}, preview: {}, links: {})",
        slug, diag.found_subtitle, diag.found_avatar, diag.found_preview, diag.found_links
    );

    Json(ExtractPageResponse::new(result.profile, result.diagnostics)).into_response()
}
