// src/infrastructure/identity/cognito.rs
use crate::application::{
    ApplicationResult, dto::UserAttribute, error::ApplicationError,
    ports::identity::IdentityProvider,
};
use async_trait::async_trait;
use reqwest::{
    Client, ClientBuilder, StatusCode,
    header::{CONTENT_TYPE, HeaderValue},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const AMZ_TARGET_HEADER: &str = "x-amz-target";
const GET_USER_TARGET: &str = "AWSCognitoIdentityProviderService.GetUser";
const AMZ_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

pub fn regional_endpoint(region: &str) -> String {
    format!("https://cognito-idp.{region}.amazonaws.com/")
}

/// Calls Cognito's `GetUser` over the JSON protocol. The access token
/// authorizes the call on its own, so requests are not signed.
#[derive(Debug, Clone)]
pub struct CognitoIdentityProvider {
    client: Client,
    endpoint: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct GetUserRequest<'a> {
    access_token: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetUserResponse {
    #[serde(default)]
    user_attributes: Vec<UserAttribute>,
}

#[derive(Deserialize)]
struct ServiceError {
    #[serde(rename = "__type", default)]
    kind: Option<String>,
    #[serde(default, alias = "Message")]
    message: Option<String>,
}

impl ServiceError {
    fn describe(self, status: StatusCode) -> String {
        // `__type` may carry a namespace prefix: `com.amazonaws...#NotAuthorizedException`.
        let kind = self
            .kind
            .as_deref()
            .map(|kind| kind.rsplit('#').next().unwrap_or(kind).to_string());
        match (kind, self.message) {
            (Some(kind), Some(message)) => format!("{kind}: {message}"),
            (Some(kind), None) => kind,
            (None, Some(message)) => message,
            (None, None) => format!("identity provider returned HTTP {}", status.as_u16()),
        }
    }
}

impl CognitoIdentityProvider {
    pub fn new(endpoint: impl Into<String>) -> reqwest::Result<Self> {
        let client = ClientBuilder::new()
            .pool_idle_timeout(Duration::from_secs(30))
            .user_agent(concat!("profile-api/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl IdentityProvider for CognitoIdentityProvider {
    async fn get_user(&self, access_token: &str) -> ApplicationResult<Vec<UserAttribute>> {
        let body = serde_json::to_vec(&GetUserRequest { access_token })
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(AMZ_TARGET_HEADER, GET_USER_TARGET)
            .header(CONTENT_TYPE, HeaderValue::from_static(AMZ_JSON_CONTENT_TYPE))
            .body(body)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "identity provider unreachable");
                ApplicationError::infrastructure(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await.unwrap_or_default();
            let detail = serde_json::from_slice::<ServiceError>(&bytes)
                .map(|err| err.describe(status))
                .unwrap_or_else(|_| {
                    format!("identity provider returned HTTP {}", status.as_u16())
                });
            tracing::warn!(status = status.as_u16(), %detail, "GetUser rejected");
            return Err(ApplicationError::infrastructure(detail));
        }

        let payload: GetUserResponse = response
            .json()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(payload.user_attributes)
    }
}
