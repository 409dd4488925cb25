// src/presentation/http/controllers/profile.rs
use crate::application::{
    commands::profile::UpdateProfileCommand,
    dto::{ProfileView, UpdateProfileRequest},
    error::ApplicationError,
};
use crate::presentation::http::{
    error::{HttpError, HttpResult, IntoHttpResult},
    extractors::Caller,
    json,
    state::HttpState,
};
use axum::{
    Extension,
    body::Bytes,
    http::{Method, header},
    response::{IntoResponse, Response},
};

pub const UPDATED_MESSAGE: &str = "user updated successfully";

#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "Stored profile merged with identity attributes.", body = ProfileView),
        (status = 401, description = "Missing or malformed authorization header."),
        (status = 404, description = "No profile stored for the caller."),
        (status = 500, description = "Unusable caller claims, identity provider or store failure.")
    ),
    tag = "Profile"
)]
pub async fn read_profile(
    Extension(state): Extension<HttpState>,
    Caller(caller): Caller,
) -> HttpResult<Response> {
    let view = state
        .services
        .profile_queries
        .get_profile(&caller)
        .await
        .into_http()?;

    let body = json::to_html_safe_vec(&view).map_err(|err| {
        tracing::error!(error = %err, "failed to encode profile");
        HttpError::from_error(ApplicationError::infrastructure("could not marshal JSON"))
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

#[utoipa::path(
    put,
    path = "/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated.", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed or invalid update body."),
        (status = 404, description = "No profile stored for the caller."),
        (status = 500, description = "Unusable caller claims or store failure.")
    ),
    tag = "Profile"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Caller(caller): Caller,
    body: Bytes,
) -> HttpResult<&'static str> {
    let command = UpdateProfileCommand {
        body: body.to_vec(),
    };

    state
        .services
        .profile_commands
        .update_profile(&caller, command)
        .await
        .into_http()?;

    tracing::info!(username = %caller.username, "profile updated");
    Ok(UPDATED_MESSAGE)
}

/// Every method other than GET and PUT. Runs no extractor, so neither the
/// store nor the identity provider is reached.
pub async fn method_not_allowed(method: Method) -> impl IntoResponse {
    (
        [(header::ALLOW, "GET, PUT")],
        HttpError::method_not_allowed(&method),
    )
}
