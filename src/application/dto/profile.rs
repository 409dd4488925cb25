// src/application/dto/profile.rs
use crate::application::dto::IdentityAttributes;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::errors::DomainResult;
use crate::domain::profile::{Bio, ProfilePicture, ProfileUpdate, UserProfile};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored profile fields merged with the identity-provider attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub username: String,
    pub nickname: String,
    pub email: String,
    pub bio: String,
    pub profile_picture: String,
}

impl ProfileView {
    pub fn from_parts(profile: UserProfile, identity: IdentityAttributes) -> Self {
        Self {
            username: profile.username.into(),
            nickname: identity.nickname.unwrap_or_default(),
            email: identity.email,
            bio: profile.bio.into(),
            profile_picture: profile.profile_picture.into(),
        }
    }
}

/// Body of a profile update. Only the fields listed here can ever be
/// changed by the caller; any other key in the document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl UpdateProfileRequest {
    pub fn parse(body: &[u8]) -> ApplicationResult<Self> {
        let invalid = || ApplicationError::validation("invalid request body");

        let document: serde_json::Value = serde_json::from_slice(body).map_err(|_| invalid())?;
        if !document.is_object() {
            return Err(invalid());
        }
        serde_json::from_value(document).map_err(|_| invalid())
    }

    pub fn into_update(self) -> DomainResult<ProfileUpdate> {
        let mut update = ProfileUpdate::new();
        if let Some(bio) = self.bio {
            update = update.with_bio(Bio::new(bio)?);
        }
        if let Some(profile_picture) = self.profile_picture {
            update = update.with_profile_picture(ProfilePicture::new(profile_picture)?);
        }
        Ok(update)
    }
}
