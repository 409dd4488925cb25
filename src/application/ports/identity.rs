// src/application/ports/identity.rs
use crate::application::{ApplicationResult, dto::UserAttribute};
use async_trait::async_trait;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the attributes of the user owning `access_token`. The token is
    /// passed through untouched; validating it is the provider's job.
    async fn get_user(&self, access_token: &str) -> ApplicationResult<Vec<UserAttribute>>;
}
