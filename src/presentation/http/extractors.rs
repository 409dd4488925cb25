// src/presentation/http/extractors.rs
use crate::{
    application::{dto::CallerContext, error::ApplicationError},
    domain::profile::Username,
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::FromRequestParts,
    http::{HeaderMap, HeaderName, header::AUTHORIZATION, request::Parts},
};
use serde_json::{Map, Value};

use super::error::HttpError;

const USERNAME_CLAIM: &str = "username";

/// The caller as asserted by the upstream authorizer. Extraction fails only
/// when the username claim is unusable; a bad `authorization` header simply
/// leaves the bearer token empty.
#[derive(Debug, Clone)]
pub struct Caller(pub CallerContext);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let username =
            username_claim(&parts.headers, &app_state.claims_header).map_err(HttpError::from_error)?;
        let bearer_token = bearer_token(&parts.headers);

        Ok(Self(CallerContext::new(username, bearer_token)))
    }
}

/// Read the `username` claim from the JSON claims object forwarded by the
/// authorizer. The header is decoded as UTF-8, not visible ASCII, so raw
/// non-ASCII usernames pass through. Absent header, invalid JSON, missing
/// claim and non-string claim are all the same failure.
pub fn username_claim(
    headers: &HeaderMap,
    claims_header: &HeaderName,
) -> Result<Username, ApplicationError> {
    let failed = || ApplicationError::caller_context("failed to parse username");

    let raw = headers
        .get(claims_header)
        .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
        .ok_or_else(failed)?;
    let claims: Map<String, Value> = serde_json::from_str(raw).map_err(|_| failed())?;
    let username = claims
        .get(USERNAME_CLAIM)
        .and_then(Value::as_str)
        .ok_or_else(failed)?;

    Username::new(username).map_err(|_| failed())
}

/// `authorization: <scheme> <token>`; the second whitespace-separated field.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    std::str::from_utf8(headers.get(AUTHORIZATION)?.as_bytes())
        .ok()?
        .split_whitespace()
        .nth(1)
        .map(str::to_owned)
}
