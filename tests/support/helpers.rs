// tests/support/helpers.rs
use super::mocks::{FixedClock, InMemoryProfileRepo, ScriptedIdentityProvider};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::AUTHORIZATION};
use axum::response::Response;
use profile_api::application::{
    ports::identity::IdentityProvider, services::ApplicationServices,
};
use profile_api::presentation::http::{
    routes::build_router,
    state::{DEFAULT_CLAIMS_HEADER, HttpState},
};
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub struct TestApp {
    pub router: axum::Router,
    pub repo: Arc<InMemoryProfileRepo>,
    pub identity: Arc<ScriptedIdentityProvider>,
}

impl TestApp {
    pub fn new(repo: InMemoryProfileRepo, identity: ScriptedIdentityProvider) -> Self {
        let repo = Arc::new(repo);
        let identity = Arc::new(identity);
        let router = router_with(repo.clone(), identity.clone());

        Self {
            router,
            repo,
            identity,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Router over the in-memory store and an arbitrary identity provider, for
/// tests that wire a real adapter.
pub fn router_with(
    repo: Arc<InMemoryProfileRepo>,
    identity: Arc<dyn IdentityProvider>,
) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(
        repo,
        identity,
        Arc::new(FixedClock::default()),
    ));
    build_router(HttpState::with_default_claims_header(services))
}

/// An endpoint on a local port nothing listens on.
pub fn unreachable_endpoint() -> String {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .expect("ephemeral port")
        .port();
    format!("http://127.0.0.1:{port}/")
}

/// Request for `/profile` with the claims and authorization headers the
/// gateway would normally add.
pub struct ProfileRequest {
    method: Method,
    claims: Option<String>,
    authorization: Option<String>,
    body: Body,
}

impl ProfileRequest {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            claims: None,
            authorization: None,
            body: Body::empty(),
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn put(body: impl Into<String>) -> Self {
        Self::new(Method::PUT).body(body)
    }

    pub fn as_user(mut self, username: &str) -> Self {
        self.claims = Some(serde_json::json!({ "username": username }).to_string());
        self
    }

    pub fn claims(mut self, raw: impl Into<String>) -> Self {
        self.claims = Some(raw.into());
        self
    }

    pub fn bearer(mut self, token: &str) -> Self {
        self.authorization = Some(format!("Bearer {token}"));
        self
    }

    pub fn authorization(mut self, raw: impl Into<String>) -> Self {
        self.authorization = Some(raw.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Body::from(body.into());
        self
    }

    pub fn build(self) -> Request<Body> {
        let mut builder = Request::builder().method(self.method).uri("/profile");
        if let Some(claims) = self.claims {
            builder = builder.header(DEFAULT_CLAIMS_HEADER, claims);
        }
        if let Some(authorization) = self.authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }
        builder.body(self.body).unwrap()
    }
}

pub async fn read_text(resp: Response) -> (StatusCode, String) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

/// Assert a plain-text error response with the given status and message.
pub async fn assert_text_response(resp: Response, expected_status: StatusCode, expected_body: &str) {
    let (status, body) = read_text(resp).await;
    assert_eq!(status, expected_status, "unexpected status, body: {body}");
    assert_eq!(body, expected_body);
}
