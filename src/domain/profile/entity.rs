// src/domain/profile/entity.rs
use crate::domain::profile::value_objects::{Bio, ProfilePicture, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: Username,
    pub bio: Bio,
    pub profile_picture: ProfilePicture,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Copies the fields present in `update` onto the record. The username and
    /// creation/deletion timestamps are never touched.
    pub fn apply(&mut self, update: ProfileUpdate, now: DateTime<Utc>) {
        if let Some(bio) = update.bio {
            self.bio = bio;
        }
        if let Some(profile_picture) = update.profile_picture {
            self.profile_picture = profile_picture;
        }
        self.updated_at = now;
    }
}

/// The mutable subset of a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub bio: Option<Bio>,
    pub profile_picture: Option<ProfilePicture>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bio(mut self, bio: Bio) -> Self {
        self.bio = Some(bio);
        self
    }

    pub fn with_profile_picture(mut self, profile_picture: ProfilePicture) -> Self {
        self.profile_picture = Some(profile_picture);
        self
    }
}
