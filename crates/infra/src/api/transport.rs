//! Authenticating transport
//!
//! Wraps an [`HttpSender`] and decorates every outbound request with the
//! content-negotiation headers and the `Authorization` header built from the
//! token source. The caller's request is never mutated; the transport sends
//! a clone.

use std::sync::Arc;

use dpa_domain::constants::JSON_MEDIA_TYPE;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Request, Response};
use tracing::debug;

use super::auth::{AuthError, TokenSource};
use super::errors::ApiError;
use crate::http::{HttpClient, HttpSender};

/// Token-injecting transport
#[derive(Clone, Default)]
pub struct Transport {
    source: Option<Arc<dyn TokenSource>>,
    base: Option<Arc<dyn HttpSender>>,
}

impl Transport {
    /// Transport with `source` over the shared default sender.
    pub fn new(source: Arc<dyn TokenSource>) -> Self {
        Self { source: Some(source), base: None }
    }

    /// Replace the underlying sender.
    #[must_use]
    pub fn with_base(mut self, base: Arc<dyn HttpSender>) -> Self {
        self.base = Some(base);
        self
    }

    /// Authenticate and send a clone of `request`.
    ///
    /// # Errors
    /// - [`ApiError::MissingCredentialSource`] without a token source
    /// - [`ApiError::TokenUnavailable`] when the source fails
    /// - [`ApiError::Transport`] when no status was received
    pub async fn round_trip(&self, request: &Request) -> Result<Response, ApiError> {
        let source = self.source.as_ref().ok_or(ApiError::MissingCredentialSource)?;
        let token = source.token().await.map_err(ApiError::TokenUnavailable)?;

        let mut outbound = request.try_clone().ok_or_else(|| {
            ApiError::invalid_request(
                request.method().clone(),
                request.url().as_str(),
                "streaming request bodies cannot be cloned",
            )
        })?;

        let mut authorization = HeaderValue::from_str(&token.authorization_value()).map_err(|_| {
            ApiError::TokenUnavailable(AuthError::Source(
                "token is not a valid header value".into(),
            ))
        })?;
        authorization.set_sensitive(true);

        let headers = outbound.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
        headers.insert(AUTHORIZATION, authorization);

        let base: Arc<dyn HttpSender> = match &self.base {
            Some(base) => Arc::clone(base),
            None => HttpClient::shared()?,
        };

        debug!(method = %outbound.method(), url = %outbound.url(), scheme = token.scheme(), "dispatching");
        base.send(outbound).await.map_err(|source| ApiError::Transport {
            method: request.method().clone(),
            url: request.url().clone(),
            source,
        })
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("has_source", &self.source.is_some())
            .field("has_base", &self.base.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use dpa_domain::Token;
    use reqwest::Method;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::auth::StaticTokenSource;
    use crate::api::errors::ErrorKind;

    struct FailingSource;

    #[async_trait]
    impl TokenSource for FailingSource {
        async fn token(&self) -> Result<Token, AuthError> {
            Err(AuthError::Source("identity tenant unreachable".into()))
        }
    }

    struct CountingSender {
        inner: HttpClient,
        sent: AtomicUsize,
    }

    #[async_trait]
    impl HttpSender for CountingSender {
        async fn send(&self, request: Request) -> Result<Response, reqwest::Error> {
            self.sent.fetch_add(1, Ordering::SeqCst);
            self.inner.send(request).await
        }
    }

    fn static_source(token: Token) -> Arc<dyn TokenSource> {
        Arc::new(StaticTokenSource::new(token))
    }

    fn get(url: &str) -> Request {
        Request::new(Method::GET, url.parse().unwrap())
    }

    #[tokio::test]
    async fn test_sets_auth_and_content_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/settings"))
            .and(header("authorization", "Bearer abc123"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let transport = Transport::new(static_source(Token::new("abc123", "bearer")));
        let response =
            transport.round_trip(&get(&format!("{}/api/settings", server.uri()))).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }

    #[tokio::test]
    async fn test_original_request_is_not_mutated() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(204)).mount(&server).await;

        let request = get(&server.uri());
        let transport = Transport::new(static_source(Token::bearer("abc")));
        transport.round_trip(&request).await.unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert!(request.headers().get(CONTENT_TYPE).is_none());
    }

    #[tokio::test]
    async fn test_missing_source() {
        let err = Transport::default().round_trip(&get("http://127.0.0.1:9/")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingCredentialSource);
    }

    #[tokio::test]
    async fn test_source_failure_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

        let transport = Transport::new(Arc::new(FailingSource));
        let err = transport.round_trip(&get(&server.uri())).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TokenUnavailable);
        assert!(err.to_string().contains("identity tenant unreachable"));
    }

    #[tokio::test]
    async fn test_uses_configured_base_sender() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).mount(&server).await;

        let sender = Arc::new(CountingSender { inner: HttpClient::new().unwrap(), sent: AtomicUsize::new(0) });
        let transport =
            Transport::new(static_source(Token::bearer("abc"))).with_base(sender.clone());
        transport.round_trip(&get(&server.uri())).await.unwrap();
        transport.round_trip(&get(&server.uri())).await.unwrap();

        assert_eq!(sender.sent.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = Transport::new(static_source(Token::bearer("abc")));
        let err = transport.round_trip(&get(&format!("http://{addr}/api"))).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TransportFailure);
        assert_eq!(err.method(), Some(&Method::GET));
    }
}
