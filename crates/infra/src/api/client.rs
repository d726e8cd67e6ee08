//! Generic invocation engine
//!
//! Builds a request, sends it through the authenticating [`Transport`],
//! classifies the status and decodes the body into the success or the
//! structured-error type. Nothing is retried.
//!
//! Every call returns `Result<ApiOutcome<S, E>, ApiError>`:
//! - `Ok(ApiOutcome::Success(s))` for 200/201/204/207
//! - `Ok(ApiOutcome::DomainError(e))` for 400/401/403/404/500, where the
//!   service answered with a structured error body
//! - `Err(ApiError)` for everything else (rate limiting, unexpected statuses,
//!   transport failures, deadlines, decode failures)

use dpa_domain::{BodyKind, ResponseBody};
use reqwest::{Method, Response, Url};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::context::{ExecutionContext, Interrupted};
use super::errors::ApiError;
use super::request::{render_headers, ClientOptions, WIRE_TARGET};
use super::status::{classify, StatusClass};
use super::transport::Transport;

/// Outcome of a call that reached the service and was understood
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome<S, E> {
    /// Success status; body decoded into the success type
    Success(S),
    /// Domain-error status; body decoded into the error type
    DomainError(E),
}

impl<S, E> ApiOutcome<S, E> {
    /// True for 2xx outcomes.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The decoded success body, if any.
    pub fn success(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::DomainError(_) => None,
        }
    }

    /// The decoded domain error, if the service returned one.
    pub fn domain_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::DomainError(error) => Some(error),
        }
    }

    /// Collapse into a `Result`, the domain error becoming `Err`.
    pub fn into_result(self) -> Result<S, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::DomainError(error) => Err(error),
        }
    }

    /// Transform the success value.
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> ApiOutcome<T, E> {
        match self {
            Self::Success(value) => ApiOutcome::Success(f(value)),
            Self::DomainError(error) => ApiOutcome::DomainError(error),
        }
    }
}

/// Response body that is either still on the wire or already buffered.
enum PendingBody {
    Unread(Response),
    Buffered(Vec<u8>),
}

impl PendingBody {
    async fn into_bytes(self, method: &Method, url: &Url) -> Result<Vec<u8>, ApiError> {
        match self {
            Self::Buffered(bytes) => Ok(bytes),
            Self::Unread(response) => read_body(response, method, url).await,
        }
    }
}

async fn read_body(response: Response, method: &Method, url: &Url) -> Result<Vec<u8>, ApiError> {
    response.bytes().await.map(|bytes| bytes.to_vec()).map_err(|source| ApiError::Transport {
        method: method.clone(),
        url: url.clone(),
        source,
    })
}

async fn decode<T: ResponseBody>(
    body: PendingBody,
    method: &Method,
    url: &Url,
) -> Result<T, ApiError> {
    let bytes = match T::KIND {
        // Dropping an unread response releases the connection.
        BodyKind::Discard => Vec::new(),
        BodyKind::Text | BodyKind::Json => body.into_bytes(method, url).await?,
    };

    T::from_body(&bytes).map_err(|source| ApiError::Decode {
        method: method.clone(),
        url: url.clone(),
        body: String::from_utf8_lossy(&bytes).into_owned(),
        source,
    })
}

/// HTTP client for the DPA API
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Transport,
    options: ClientOptions,
}

impl ApiClient {
    /// Engine over `transport` configured by `options`.
    pub fn new(transport: Transport, options: ClientOptions) -> Self {
        Self { transport, options }
    }

    /// Base URL and verbosity in effect.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Execute a GET request
    ///
    /// # Errors
    /// See [`ApiClient::invoke`].
    pub async fn get<S, E>(&self, ctx: &ExecutionContext, path: &str) -> Result<ApiOutcome<S, E>, ApiError>
    where
        S: ResponseBody,
        E: ResponseBody,
    {
        self.invoke::<(), S, E>(ctx, Method::GET, path, None).await
    }

    /// Execute a POST request with a JSON payload
    ///
    /// # Errors
    /// See [`ApiClient::invoke`].
    pub async fn post<P, S, E>(
        &self,
        ctx: &ExecutionContext,
        path: &str,
        payload: &P,
    ) -> Result<ApiOutcome<S, E>, ApiError>
    where
        P: Serialize + ?Sized,
        S: ResponseBody,
        E: ResponseBody,
    {
        self.invoke(ctx, Method::POST, path, Some(payload)).await
    }

    /// Execute a PUT request with a JSON payload
    ///
    /// # Errors
    /// See [`ApiClient::invoke`].
    pub async fn put<P, S, E>(
        &self,
        ctx: &ExecutionContext,
        path: &str,
        payload: &P,
    ) -> Result<ApiOutcome<S, E>, ApiError>
    where
        P: Serialize + ?Sized,
        S: ResponseBody,
        E: ResponseBody,
    {
        self.invoke(ctx, Method::PUT, path, Some(payload)).await
    }

    /// Execute a PATCH request with a JSON payload
    ///
    /// # Errors
    /// See [`ApiClient::invoke`].
    pub async fn patch<P, S, E>(
        &self,
        ctx: &ExecutionContext,
        path: &str,
        payload: &P,
    ) -> Result<ApiOutcome<S, E>, ApiError>
    where
        P: Serialize + ?Sized,
        S: ResponseBody,
        E: ResponseBody,
    {
        self.invoke(ctx, Method::PATCH, path, Some(payload)).await
    }

    /// Execute a DELETE request without a body
    ///
    /// # Errors
    /// See [`ApiClient::invoke`].
    pub async fn delete<S, E>(&self, ctx: &ExecutionContext, path: &str) -> Result<ApiOutcome<S, E>, ApiError>
    where
        S: ResponseBody,
        E: ResponseBody,
    {
        self.invoke::<(), S, E>(ctx, Method::DELETE, path, None).await
    }

    /// Execute a DELETE request with a JSON payload (bulk deletes)
    ///
    /// # Errors
    /// See [`ApiClient::invoke`].
    pub async fn delete_with<P, S, E>(
        &self,
        ctx: &ExecutionContext,
        path: &str,
        payload: &P,
    ) -> Result<ApiOutcome<S, E>, ApiError>
    where
        P: Serialize + ?Sized,
        S: ResponseBody,
        E: ResponseBody,
    {
        self.invoke(ctx, Method::DELETE, path, Some(payload)).await
    }

    /// Execute one request and route the response by status class.
    ///
    /// Token acquisition, send and the full body read all run inside `ctx`,
    /// so a deadline or cancellation at any point fails the call instead of
    /// producing a partial result.
    ///
    /// # Errors
    /// - [`ApiError::Serialization`] / [`ApiError::InvalidRequest`] before any
    ///   network activity
    /// - [`ApiError::MissingCredentialSource`] / [`ApiError::TokenUnavailable`]
    ///   from the transport
    /// - [`ApiError::Transport`] when no status (or no full body) was received
    /// - [`ApiError::RateLimited`] on 429, [`ApiError::UnexpectedStatus`] on
    ///   any status outside the known classes
    /// - [`ApiError::Decode`] when the body does not match the target type
    /// - [`ApiError::DeadlineExceeded`] / [`ApiError::Cancelled`] from `ctx`
    #[instrument(skip_all, fields(%method, %path))]
    pub async fn invoke<P, S, E>(
        &self,
        ctx: &ExecutionContext,
        method: Method,
        path: &str,
        payload: Option<&P>,
    ) -> Result<ApiOutcome<S, E>, ApiError>
    where
        P: Serialize + ?Sized,
        S: ResponseBody,
        E: ResponseBody,
    {
        let request = self.options.build(method, path, payload)?;
        let method = request.method().clone();
        let url = request.url().clone();

        let exchange = async {
            let response = self.transport.round_trip(&request).await?;
            self.route::<S, E>(response, &method, &url).await
        };

        match ctx.run(exchange).await {
            Ok(outcome) => outcome,
            Err(Interrupted::Cancelled) => {
                debug!(%method, %url, "request cancelled");
                Err(ApiError::Cancelled { method, url })
            }
            Err(Interrupted::DeadlineExceeded) => {
                warn!(%method, %url, "request exceeded its deadline");
                Err(ApiError::DeadlineExceeded { method, url })
            }
        }
    }

    async fn route<S, E>(
        &self,
        response: Response,
        method: &Method,
        url: &Url,
    ) -> Result<ApiOutcome<S, E>, ApiError>
    where
        S: ResponseBody,
        E: ResponseBody,
    {
        let status = response.status().as_u16();

        let body = if self.options.verbose {
            let headers = render_headers(response.headers());
            let bytes = read_body(response, method, url).await?;
            info!(
                target: WIRE_TARGET,
                %method,
                %url,
                status,
                headers = %headers,
                body = %String::from_utf8_lossy(&bytes),
                "response"
            );
            PendingBody::Buffered(bytes)
        } else {
            PendingBody::Unread(response)
        };

        match classify(status) {
            StatusClass::Success => {
                debug!(status, "success response");
                decode::<S>(body, method, url).await.map(ApiOutcome::Success)
            }
            StatusClass::DomainError => {
                debug!(status, "domain error response");
                decode::<E>(body, method, url).await.map(ApiOutcome::DomainError)
            }
            StatusClass::Throttled => {
                warn!(%method, %url, "rate limited");
                Err(ApiError::RateLimited { method: method.clone(), url: url.clone() })
            }
            StatusClass::Fatal => {
                warn!(%method, %url, status, "unexpected status");
                Err(ApiError::UnexpectedStatus { method: method.clone(), url: url.clone(), status })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dpa_domain::{Discard, ErrorResponse, Json, ListPolicies, Token};
    use serde::Deserialize;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::auth::StaticTokenSource;
    use crate::api::errors::ErrorKind;

    async fn client_for(server: &MockServer, verbose: bool) -> ApiClient {
        let transport = Transport::new(Arc::new(StaticTokenSource::new(Token::bearer("abc"))));
        ApiClient::new(transport, ClientOptions::new(format!("{}/api", server.uri()), verbose))
    }

    fn error_body() -> serde_json::Value {
        serde_json::json!({
            "code": "DPA_CRUD_ACTION_FAILED",
            "message": "Unable to update...",
            "description": "policy not found"
        })
    }

    #[tokio::test]
    async fn test_success_decodes_into_success_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/access-policies"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"items": [], "totalCount": 0})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, false).await;
        let outcome = client
            .get::<ListPolicies, ErrorResponse>(&ExecutionContext::background(), "/access-policies")
            .await
            .unwrap();
        assert_eq!(outcome.success().map(|list| list.total_count), Some(0));
    }

    #[tokio::test]
    async fn test_domain_error_is_not_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(error_body()))
            .mount(&server)
            .await;

        let client = client_for(&server, false).await;
        let outcome = client
            .get::<ListPolicies, ErrorResponse>(&ExecutionContext::background(), "/access-policies")
            .await
            .unwrap();
        let error = outcome.domain_error().unwrap();
        assert_eq!(error.message, "Unable to update...");
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_json(error_body()))
            .mount(&server)
            .await;

        let client = client_for(&server, false).await;
        let err = client
            .get::<ListPolicies, ErrorResponse>(&ExecutionContext::background(), "/access-policies")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RateLimited);
    }

    #[tokio::test]
    async fn test_unexpected_status_carries_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(502)).mount(&server).await;

        let client = client_for(&server, false).await;
        let err = client
            .get::<ListPolicies, ErrorResponse>(&ExecutionContext::background(), "/x")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedStatus);
        assert_eq!(err.status(), Some(502));
    }

    #[tokio::test]
    async fn test_text_target_receives_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ssh-rsa AAAA dpa"))
            .mount(&server)
            .await;

        let client = client_for(&server, false).await;
        let outcome = client
            .get::<String, ErrorResponse>(&ExecutionContext::background(), "/public-keys")
            .await
            .unwrap();
        assert_eq!(outcome.success().as_deref(), Some("ssh-rsa AAAA dpa"));
    }

    #[tokio::test]
    async fn test_discard_target_ignores_invalid_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server, false).await;
        let outcome = client
            .delete::<Discard, ErrorResponse>(&ExecutionContext::background(), "/x")
            .await
            .unwrap();
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_decode_failure_carries_context() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"items\": 5}"))
            .mount(&server)
            .await;

        let client = client_for(&server, false).await;
        let err = client
            .get::<ListPolicies, ErrorResponse>(&ExecutionContext::background(), "/access-policies")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecodeFailure);
        assert_eq!(err.method(), Some(&Method::GET));
        assert!(err.to_string().contains("{\"items\": 5}"));
    }

    #[tokio::test]
    async fn test_no_content_decodes_optional_target() {
        let server = MockServer::start().await;
        Mock::given(method("PUT")).respond_with(ResponseTemplate::new(204)).mount(&server).await;

        #[derive(Debug, Deserialize)]
        struct Updated {
            #[allow(dead_code)]
            id: String,
        }

        let client = client_for(&server, false).await;
        let outcome = client
            .put::<_, Json<Option<Updated>>, ErrorResponse>(
                &ExecutionContext::background(),
                "/x",
                &serde_json::json!({"a": 1}),
            )
            .await
            .unwrap();
        assert!(outcome.success().unwrap().into_inner().is_none());
    }

    #[tokio::test]
    async fn test_payload_is_sent_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(body_json(serde_json::json!({"rdpFileTransfer": {"enabled": true}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, true).await;
        let outcome = client
            .patch::<_, serde_json::Value, ErrorResponse>(
                &ExecutionContext::background(),
                "/settings",
                &serde_json::json!({"rdpFileTransfer": {"enabled": true}}),
            )
            .await
            .unwrap();
        assert!(outcome.is_success());
    }

    #[tokio::test]
    async fn test_verbose_mode_still_decodes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(error_body()))
            .mount(&server)
            .await;

        let client = client_for(&server, true).await;
        let outcome = client
            .get::<ListPolicies, ErrorResponse>(&ExecutionContext::background(), "/access-policies")
            .await
            .unwrap();
        assert_eq!(outcome.domain_error().unwrap().code, "DPA_CRUD_ACTION_FAILED");
    }

    #[test]
    fn test_outcome_helpers() {
        let ok: ApiOutcome<u32, String> = ApiOutcome::Success(2);
        assert_eq!(ok.clone().map(|v| v * 2), ApiOutcome::Success(4));
        assert_eq!(ok.into_result(), Ok(2));

        let err: ApiOutcome<u32, String> = ApiOutcome::DomainError("nope".into());
        assert!(!err.is_success());
        assert_eq!(err.into_result(), Err("nope".to_string()));
    }
}
