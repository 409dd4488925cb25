// src/application/dto/caller.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::profile::Username;

/// Identity of the caller for a single request, as asserted upstream.
///
/// The username is trusted as-is. The bearer token is only ever forwarded to
/// the identity provider and never inspected here.
#[derive(Debug, Clone)]
pub struct CallerContext {
    pub username: Username,
    bearer_token: Option<String>,
}

impl CallerContext {
    pub fn new(username: Username, bearer_token: Option<String>) -> Self {
        Self {
            username,
            bearer_token,
        }
    }

    pub fn bearer_token(&self) -> ApplicationResult<&str> {
        self.bearer_token.as_deref().ok_or_else(|| {
            ApplicationError::unauthorized("missing or malformed authorization header")
        })
    }
}
