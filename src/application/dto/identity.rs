// src/application/dto/identity.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use serde::Deserialize;

pub const EMAIL_ATTRIBUTE: &str = "email";
pub const NICKNAME_ATTRIBUTE: &str = "nickname";

/// One `{Name, Value}` pair as returned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserAttribute {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Value", default)]
    pub value: String,
}

impl UserAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityAttributes {
    pub email: String,
    pub nickname: Option<String>,
}

impl IdentityAttributes {
    /// Pick `email` and `nickname` out of the provider's attribute list. When
    /// an attribute is repeated the last occurrence wins.
    pub fn from_attributes(attributes: Vec<UserAttribute>) -> ApplicationResult<Self> {
        let mut email = None;
        let mut nickname = None;
        for attribute in attributes {
            match attribute.name.as_str() {
                EMAIL_ATTRIBUTE => email = Some(attribute.value),
                NICKNAME_ATTRIBUTE => nickname = Some(attribute.value),
                _ => {}
            }
        }

        let email = email
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ApplicationError::caller_context("could not find user email"))?;

        Ok(Self { email, nickname })
    }
}
