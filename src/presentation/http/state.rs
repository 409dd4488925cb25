// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use axum::http::HeaderName;
use std::sync::Arc;

pub const DEFAULT_CLAIMS_HEADER: &str = "x-authorizer-claims";

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Header through which the upstream authorizer forwards its claims.
    pub claims_header: HeaderName,
}

impl HttpState {
    pub fn new(services: Arc<ApplicationServices>, claims_header: HeaderName) -> Self {
        Self {
            services,
            claims_header,
        }
    }

    pub fn with_default_claims_header(services: Arc<ApplicationServices>) -> Self {
        Self::new(services, HeaderName::from_static(DEFAULT_CLAIMS_HEADER))
    }
}
