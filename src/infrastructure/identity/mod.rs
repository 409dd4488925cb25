// src/infrastructure/identity/mod.rs
mod cognito;

pub use cognito::{CognitoIdentityProvider, regional_endpoint};
