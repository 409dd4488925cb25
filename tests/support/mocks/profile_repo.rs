// tests/support/mocks/profile_repo.rs
use async_trait::async_trait;
use profile_api::domain::errors::{DomainError, DomainResult};
use profile_api::domain::profile::{ProfileRepository, UserProfile, Username};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Profile store backed by a map. Counts calls so tests can assert that a
/// request never reached the store.
#[derive(Default)]
pub struct InMemoryProfileRepo {
    inner: Mutex<HashMap<String, UserProfile>>,
    save_error: Option<String>,
    finds: AtomicUsize,
    saves: AtomicUsize,
}

impl InMemoryProfileRepo {
    pub fn with_profiles(profiles: impl IntoIterator<Item = UserProfile>) -> Self {
        let map = profiles
            .into_iter()
            .map(|p| (p.username.as_str().to_string(), p))
            .collect();
        Self {
            inner: Mutex::new(map),
            ..Self::default()
        }
    }

    pub fn failing_saves(mut self, message: impl Into<String>) -> Self {
        self.save_error = Some(message.into());
        self
    }

    /// Raw stored row, including soft-deleted ones.
    pub fn stored(&self, username: &str) -> Option<UserProfile> {
        self.inner.lock().unwrap().get(username).cloned()
    }

    pub fn find_calls(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    pub fn save_calls(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepo {
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<UserProfile>> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        let map = self.inner.lock().unwrap();
        Ok(map
            .get(username.as_str())
            .filter(|profile| !profile.is_deleted())
            .cloned())
    }

    async fn save(&self, profile: &UserProfile) -> DomainResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.save_error {
            return Err(DomainError::Persistence(message.clone()));
        }
        let mut map = self.inner.lock().unwrap();
        map.insert(profile.username.as_str().to_string(), profile.clone());
        Ok(())
    }
}
