use axum::{Router, http::HeaderName, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    app_state::AppState,
    extractor::{Diagnostics, ExtractedProfile, PageLink},
    health::{self, HealthResponse},
    pages::{
        self,
        dtos::{ExtractErrorResponse, ExtractPageResponse},
    },
};

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(OpenApi)]
#[openapi(
    paths(pages::handlers::extract_page_data, health::health_check),
    components(schemas(
        ExtractPageResponse,
        ExtractErrorResponse,
        ExtractedProfile,
        PageLink,
        Diagnostics,
        HealthResponse
    )),
    tags(
        (name = "pages", description = "Legacy page extraction"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Full HTTP surface: extraction, health, docs, plus tracing and request ids.
pub fn router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/extract-page-data", get(pages::extract_page_data))
        .route("/healthz", get(health::health_check))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .with_state(state)
}
