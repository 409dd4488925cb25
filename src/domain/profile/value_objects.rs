// src/domain/profile/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const USERNAME_MAX_CHARS: usize = 128;
pub const BIO_MAX_CHARS: usize = 1024;
pub const PROFILE_PICTURE_MAX_CHARS: usize = 512;

fn ensure_max_chars(field: &str, value: &str, max: usize) -> DomainResult<()> {
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters long"
        )));
    }
    Ok(())
}

/// Primary key of a profile. Asserted by the upstream authorizer and never
/// changed once the record exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("username cannot be empty".into()));
        }
        ensure_max_chars("username", &value, USERNAME_MAX_CHARS)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bio(String);

impl Bio {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        ensure_max_chars("bio", &value, BIO_MAX_CHARS)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Bio> for String {
    fn from(value: Bio) -> Self {
        value.0
    }
}

/// URL or storage reference of the user's picture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePicture(String);

impl ProfilePicture {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        ensure_max_chars("profilePicture", &value, PROFILE_PICTURE_MAX_CHARS)?;
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ProfilePicture> for String {
    fn from(value: ProfilePicture) -> Self {
        value.0
    }
}
