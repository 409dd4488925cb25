// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::profile,
    openapi::{self, StatusResponse},
};
use axum::{Extension, Router, routing::get};
use tower_http::trace::TraceLayer;

pub const PROFILE_PATH: &str = "/profile";

pub fn build_router(state: HttpState) -> Router {
    // `get` would also answer HEAD, so HEAD is routed to the 405 handler explicitly.
    let profile_routes = get(profile::read_profile)
        .head(profile::method_not_allowed)
        .put(profile::update_profile)
        .fallback(profile::method_not_allowed);

    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::serve_openapi))
        .route(PROFILE_PATH, profile_routes)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
