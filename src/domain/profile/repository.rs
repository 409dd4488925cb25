// src/domain/profile/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::profile::{entity::UserProfile, value_objects::Username};
use async_trait::async_trait;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Soft-deleted rows are never returned.
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<UserProfile>>;

    /// Upsert keyed by username.
    async fn save(&self, profile: &UserProfile) -> DomainResult<()>;
}
