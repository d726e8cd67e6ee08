//! Service façade
//!
//! A [`Service`] owns one [`ApiClient`]. Construction is the only place the
//! token is validated: it must use the bearer scheme and must not be expired.
//! Later expiry is the token source's concern.

use std::sync::Arc;

use dpa_domain::constants::BEARER_TOKEN_TYPE;
use dpa_domain::{ResponseBody, ServiceConfig, Token};
use serde::Serialize;
use tracing::info;

use super::auth::{StaticTokenSource, TokenSource};
use super::client::{ApiClient, ApiOutcome};
use super::context::ExecutionContext;
use super::errors::ApiError;
use super::request::ClientOptions;
use super::transport::Transport;
use crate::http::{HttpClient, HttpSender};

/// Entry point for DPA API calls
#[derive(Debug, Clone)]
pub struct Service {
    client: ApiClient,
}

/// Reject tokens that are not bearer tokens or are already expired.
fn validate_token(token: &Token) -> Result<(), ApiError> {
    if token.scheme() != BEARER_TOKEN_TYPE {
        return Err(ApiError::InvalidCredential(format!(
            "invalid token type {:?}, expected a bearer token",
            token.token_type
        )));
    }
    if !token.is_valid() {
        return Err(ApiError::InvalidCredential("token is empty or expired".into()));
    }
    Ok(())
}

impl Service {
    /// Create a service for `{base_url}/{api_path}` authenticated with
    /// `token`.
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidCredential`] when the token is not a valid
    /// bearer token; no client is built in that case.
    pub fn new(base_url: &str, api_path: &str, verbose: bool, token: Token) -> Result<Self, ApiError> {
        Self::with_sender(base_url, api_path, verbose, token, None)
    }

    /// Like [`Service::new`], over a caller-supplied sender.
    ///
    /// # Errors
    /// See [`Service::new`].
    pub fn with_sender(
        base_url: &str,
        api_path: &str,
        verbose: bool,
        token: Token,
        sender: Option<Arc<dyn HttpSender>>,
    ) -> Result<Self, ApiError> {
        validate_token(&token)?;

        let mut transport = Transport::new(Arc::new(StaticTokenSource::new(token)));
        if let Some(sender) = sender {
            transport = transport.with_base(sender);
        }
        let options = ClientOptions::new(format!("{base_url}/{api_path}"), verbose);
        info!(base_url = %options.base_url, verbose, "DPA service created");

        Ok(Self { client: ApiClient::new(transport, options) })
    }

    /// Create a service from configuration, applying the configured sender
    /// timeout.
    ///
    /// # Errors
    /// [`ApiError::InvalidCredential`] for an unusable token,
    /// [`ApiError::Config`] when the sender cannot be built.
    pub fn from_config(config: &ServiceConfig, token: Token) -> Result<Self, ApiError> {
        validate_token(&token)?;
        let sender = HttpClient::builder().timeout(config.request_timeout()).build()?;
        Self::with_sender(
            &config.tenant_url,
            &config.api_path,
            config.verbose,
            token,
            Some(Arc::new(sender)),
        )
    }

    /// Create a service whose token comes from `source` on every request.
    ///
    /// The token is not validated up front; the source is expected to
    /// refresh it.
    ///
    /// # Errors
    /// [`ApiError::Config`] when the sender cannot be built.
    pub fn with_token_source(config: &ServiceConfig, source: Arc<dyn TokenSource>) -> Result<Self, ApiError> {
        let sender = HttpClient::builder().timeout(config.request_timeout()).build()?;
        let transport = Transport::new(source).with_base(Arc::new(sender));
        let options = ClientOptions::new(config.base_url(), config.verbose);
        Ok(Self { client: ApiClient::new(transport, options) })
    }

    /// Underlying invocation engine.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// # Errors
    /// See [`ApiClient::invoke`].
    pub async fn get<S, E>(&self, ctx: &ExecutionContext, path: &str) -> Result<ApiOutcome<S, E>, ApiError>
    where
        S: ResponseBody,
        E: ResponseBody,
    {
        self.client.get(ctx, path).await
    }

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
        self.client.post(ctx, path, payload).await
    }

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
        self.client.put(ctx, path, payload).await
    }

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
        self.client.patch(ctx, path, payload).await
    }

    /// # Errors
    /// See [`ApiClient::invoke`].
    pub async fn delete<S, E>(&self, ctx: &ExecutionContext, path: &str) -> Result<ApiOutcome<S, E>, ApiError>
    where
        S: ResponseBody,
        E: ResponseBody,
    {
        self.client.delete(ctx, path).await
    }

    /// DELETE with a JSON body.
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
        self.client.delete_with(ctx, path, payload).await
    }
}
