// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use profile_api::domain::profile::{Bio, ProfilePicture, UserProfile, Username};

use super::mocks::fixed_now;

pub struct ProfileBuilder {
    username: String,
    bio: String,
    profile_picture: String,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl ProfileBuilder {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            bio: "Rustacean".into(),
            profile_picture: "https://cdn.example.com/avatars/default.png".into(),
            created_at: fixed_now() - Duration::days(30),
            deleted_at: None,
        }
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn profile_picture(mut self, picture: impl Into<String>) -> Self {
        self.profile_picture = picture.into();
        self
    }

    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(fixed_now() - Duration::days(1));
        self
    }

    pub fn build(self) -> UserProfile {
        UserProfile {
            username: Username::new(self.username).expect("valid username"),
            bio: Bio::new(self.bio).expect("valid bio"),
            profile_picture: ProfilePicture::new(self.profile_picture).expect("valid picture"),
            created_at: self.created_at,
            updated_at: self.created_at,
            deleted_at: self.deleted_at,
        }
    }
}
