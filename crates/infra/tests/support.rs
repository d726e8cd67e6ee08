//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use dpa_domain::Token;
use dpa_infra::api::AuthError;
use dpa_infra::{Service, TokenSource};
use wiremock::MockServer;

/// Access token every test service presents.
pub const TEST_TOKEN: &str = "test-access-token";

/// Expected `Authorization` header value for [`TEST_TOKEN`].
pub fn bearer_header() -> String {
    format!("Bearer {TEST_TOKEN}")
}

/// Service rooted at `{server}/api` with a valid bearer token.
pub fn service_for(server: &MockServer) -> Service {
    service_with_verbose(server, false)
}

pub fn service_with_verbose(server: &MockServer, verbose: bool) -> Service {
    Service::new(&server.uri(), "api", verbose, Token::bearer(TEST_TOKEN))
        .expect("bearer token should be accepted")
}

/// Token source that always fails.
#[derive(Debug, Default)]
pub struct FailingTokenSource;

#[async_trait]
impl TokenSource for FailingTokenSource {
    async fn token(&self) -> Result<Token, AuthError> {
        Err(AuthError::Source("identity tenant unreachable".into()))
    }
}

pub fn failing_source() -> Arc<dyn TokenSource> {
    Arc::new(FailingTokenSource)
}
