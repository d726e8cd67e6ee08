use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Request, Response};
use tracing::debug;

use crate::api::errors::ApiError;

/// Sends a fully built request and returns the raw response.
///
/// Implementations must be safe to share across concurrent callers.
#[async_trait]
pub trait HttpSender: Send + Sync {
    /// Dispatch `request`.
    ///
    /// # Errors
    /// Returns the `reqwest` error when no status was received (DNS,
    /// connection, TLS, sender timeout).
    async fn send(&self, request: Request) -> Result<Response, reqwest::Error>;
}

/// User agent sent when the builder is not given one.
pub const DEFAULT_USER_AGENT: &str = concat!("dpa-client/", env!("CARGO_PKG_VERSION"));

/// Thin `reqwest` client wrapper with timeout and user agent defaults.
///
/// Proxies are taken from the environment (`HTTP_PROXY`, `HTTPS_PROXY`,
/// `NO_PROXY`). Failed requests are never retried.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, ApiError> {
        Self::builder().build()
    }

    /// Process-wide default sender used when a transport has no base.
    pub(crate) fn shared() -> Result<Arc<Self>, ApiError> {
        static SHARED: OnceLock<Arc<HttpClient>> = OnceLock::new();

        if let Some(client) = SHARED.get() {
            return Ok(Arc::clone(client));
        }
        let client = Arc::new(Self::new()?);
        Ok(Arc::clone(SHARED.get_or_init(|| client)))
    }
}

#[async_trait]
impl HttpSender for HttpClient {
    async fn send(&self, request: Request) -> Result<Response, reqwest::Error> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(err)
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: String,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(dpa_domain::constants::DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpClientBuilder {
    /// Overall timeout applied by `reqwest` to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override [`DEFAULT_USER_AGENT`].
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn build(self) -> Result<HttpClient, ApiError> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(HttpClient { client })
    }
}
