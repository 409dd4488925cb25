// tests/support/mocks/identity.rs
use async_trait::async_trait;
use profile_api::application::{
    ApplicationResult, dto::UserAttribute, error::ApplicationError,
    ports::identity::IdentityProvider,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const VALID_TOKEN: &str = "valid-token";

/// Identity provider answering from a fixed token → attributes table.
/// Unknown tokens are rejected the way Cognito rejects them.
#[derive(Default)]
pub struct ScriptedIdentityProvider {
    users: HashMap<String, Vec<UserAttribute>>,
    calls: AtomicUsize,
}

impl ScriptedIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, token: &str, attributes: Vec<UserAttribute>) -> Self {
        self.users.insert(token.to_string(), attributes);
        self
    }

    /// `VALID_TOKEN` resolving to the given email and nickname.
    pub fn alice() -> Self {
        Self::new().with_user(
            VALID_TOKEN,
            vec![
                UserAttribute::new("sub", "5f1c-0042"),
                UserAttribute::new("email", "alice@example.com"),
                UserAttribute::new("nickname", "ally"),
            ],
        )
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for ScriptedIdentityProvider {
    async fn get_user(&self, access_token: &str) -> ApplicationResult<Vec<UserAttribute>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.users.get(access_token).cloned().ok_or_else(|| {
            ApplicationError::infrastructure("NotAuthorizedException: Invalid Access Token")
        })
    }
}
