//! Router construction and HTTP middleware layers.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use gudang_core::Config;

use crate::api_doc::ApiDoc;
use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;

fn build_cors(config: &Config) -> CorsLayer {
    if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse::<http::HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = build_cors(&state.config);
    let body_limit = DefaultBodyLimit::max(state.config.max_photo_size_bytes);

    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .route(
            &format!("{}/loader-requests", API_PREFIX),
            post(handlers::loader_requests::create_loader_request)
                .get(handlers::loader_requests::list_loader_requests),
        )
        .route(
            &format!("{}/loader-requests/{{id}}", API_PREFIX),
            get(handlers::loader_requests::get_loader_request),
        )
        .route(
            &format!("{}/loader-requests/{{id}}/report", API_PREFIX),
            get(handlers::report::download_report),
        )
        .route(
            &format!("{}/logo", API_PREFIX),
            post(handlers::logo::upload_logo),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(body_limit)
        .with_state(state)
}
