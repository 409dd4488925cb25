// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::profile::ProfileCommandService,
        ports::{identity::IdentityProvider, time::Clock},
        queries::profile::ProfileQueryService,
    },
    domain::profile::ProfileRepository,
};

/// Everything a request handler needs. Built once at start-up and shared
/// read-only between requests.
pub struct ApplicationServices {
    pub profile_queries: Arc<ProfileQueryService>,
    pub profile_commands: Arc<ProfileCommandService>,
}

impl ApplicationServices {
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        identity_provider: Arc<dyn IdentityProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let profile_queries = Arc::new(ProfileQueryService::new(
            Arc::clone(&profile_repo),
            Arc::clone(&identity_provider),
        ));
        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&profile_repo),
            Arc::clone(&clock),
        ));

        Self {
            profile_queries,
            profile_commands,
        }
    }
}
