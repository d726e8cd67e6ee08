//! API-specific error types
//!
//! Every failure of the invocation engine is an [`ApiError`]. Callers branch
//! on [`ApiError::kind`] rather than on message text. Structured error bodies
//! returned by the service are not failures; they arrive as
//! [`ApiOutcome::DomainError`](super::client::ApiOutcome::DomainError).

use reqwest::{Method, Url};
use thiserror::Error;

use super::auth::AuthError;

/// Classification of an [`ApiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Payload could not be encoded
    SerializationFailed,
    /// Malformed path or method, detected before send
    InvalidRequest,
    /// No status was received (DNS, connection, TLS)
    TransportFailure,
    /// Status 429
    RateLimited,
    /// Status outside every known class
    UnexpectedStatus,
    /// Body did not match the decode target
    DecodeFailure,
    /// Transport has no token source
    MissingCredentialSource,
    /// Token rejected at Service construction
    InvalidCredential,
    /// Token source failed to produce a token
    TokenUnavailable,
    /// Execution context deadline elapsed
    DeadlineExceeded,
    /// Execution context was cancelled
    Cancelled,
    /// Configuration could not be loaded or applied
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to serialize {method} {path} payload: {source}")]
    Serialization {
        method: Method,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid request {method} {target}: {reason}")]
    InvalidRequest { method: Method, target: String, reason: String },

    #[error("{method} {url} failed: {source}")]
    Transport {
        method: Method,
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {url} was rate limited (429)")]
    RateLimited { method: Method, url: Url },

    #[error("{method} {url} returned unexpected status {status}")]
    UnexpectedStatus { method: Method, url: Url, status: u16 },

    #[error("Failed to decode {method} {url} response: {source}; body: {body}")]
    Decode {
        method: Method,
        url: Url,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Transport has no token source")]
    MissingCredentialSource,

    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    #[error("Failed to obtain access token: {0}")]
    TokenUnavailable(#[source] AuthError),

    #[error("{method} {url} exceeded its deadline")]
    DeadlineExceeded { method: Method, url: Url },

    #[error("{method} {url} was cancelled")]
    Cancelled { method: Method, url: Url },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Serialization { .. } => ErrorKind::SerializationFailed,
            Self::InvalidRequest { .. } => ErrorKind::InvalidRequest,
            Self::Transport { .. } => ErrorKind::TransportFailure,
            Self::RateLimited { .. } => ErrorKind::RateLimited,
            Self::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            Self::Decode { .. } => ErrorKind::DecodeFailure,
            Self::MissingCredentialSource => ErrorKind::MissingCredentialSource,
            Self::InvalidCredential(_) => ErrorKind::InvalidCredential,
            Self::TokenUnavailable(_) => ErrorKind::TokenUnavailable,
            Self::DeadlineExceeded { .. } => ErrorKind::DeadlineExceeded,
            Self::Cancelled { .. } => ErrorKind::Cancelled,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// HTTP method of the failed call, when a request was involved.
    pub fn method(&self) -> Option<&Method> {
        match self {
            Self::Serialization { method, .. }
            | Self::InvalidRequest { method, .. }
            | Self::Transport { method, .. }
            | Self::RateLimited { method, .. }
            | Self::UnexpectedStatus { method, .. }
            | Self::Decode { method, .. }
            | Self::DeadlineExceeded { method, .. }
            | Self::Cancelled { method, .. } => Some(method),
            _ => None,
        }
    }

    /// Target URL of the failed call, once one was resolved.
    pub fn url(&self) -> Option<&Url> {
        match self {
            Self::Transport { url, .. }
            | Self::RateLimited { url, .. }
            | Self::UnexpectedStatus { url, .. }
            | Self::Decode { url, .. }
            | Self::DeadlineExceeded { url, .. }
            | Self::Cancelled { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Raw status code for [`ErrorKind::UnexpectedStatus`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            _ => None,
        }
    }

    pub(crate) fn invalid_request(
        method: Method,
        target: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidRequest { method, target: target.into(), reason: reason.into() }
    }
}
