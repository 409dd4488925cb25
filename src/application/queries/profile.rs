// src/application/queries/profile.rs
use crate::{
    application::{
        dto::{CallerContext, IdentityAttributes, ProfileView},
        error::{ApplicationError, ApplicationResult},
        ports::identity::IdentityProvider,
    },
    domain::profile::ProfileRepository,
};
use std::sync::Arc;

pub struct ProfileQueryService {
    profile_repo: Arc<dyn ProfileRepository>,
    identity_provider: Arc<dyn IdentityProvider>,
}

impl ProfileQueryService {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        identity_provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            profile_repo,
            identity_provider,
        }
    }

    /// Resolve the caller's identity attributes and merge them with the
    /// stored profile. The identity provider is consulted before the store,
    /// so a missing email fails the request whatever the store holds.
    pub async fn get_profile(&self, caller: &CallerContext) -> ApplicationResult<ProfileView> {
        let token = caller.bearer_token()?;

        let attributes = self.identity_provider.get_user(token).await?;
        let identity = IdentityAttributes::from_attributes(attributes)?;

        let profile = self
            .profile_repo
            .find_by_username(&caller.username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        Ok(ProfileView::from_parts(profile, identity))
    }
}
