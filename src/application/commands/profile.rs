// src/application/commands/profile.rs
use crate::{
    application::{
        dto::{CallerContext, UpdateProfileRequest},
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::profile::ProfileRepository,
};
use std::sync::Arc;

/// Raw update document. Parsing is deferred until the target record has been
/// loaded, so an unknown caller is reported before a malformed body.
pub struct UpdateProfileCommand {
    pub body: Vec<u8>,
}

pub struct ProfileCommandService {
    profile_repo: Arc<dyn ProfileRepository>,
    clock: Arc<dyn Clock>,
}

impl ProfileCommandService {
    pub fn new(profile_repo: Arc<dyn ProfileRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            profile_repo,
            clock,
        }
    }

    /// Apply a partial update to the caller's own record. Records are never
    /// created here; the username of the stored row is never rewritten.
    pub async fn update_profile(
        &self,
        caller: &CallerContext,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<()> {
        let mut profile = self
            .profile_repo
            .find_by_username(&caller.username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let update = UpdateProfileRequest::parse(&command.body)?.into_update()?;
        profile.apply(update, self.clock.now());

        self.profile_repo.save(&profile).await?;
        Ok(())
    }
}
