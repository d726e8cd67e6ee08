//! Request construction
//!
//! Turns `(method, path, payload)` into a `reqwest::Request` against the
//! configured base URL. Everything that can be rejected without the network
//! is rejected here.

use std::fmt::Write as _;

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Method, Request, Url};
use serde::Serialize;
use tracing::info;

use super::errors::ApiError;

/// Tracing target for verbose request/response dumps.
pub const WIRE_TARGET: &str = "dpa::wire";

/// Client options, immutable once the client is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Base URL every path is appended to, e.g. `https://tenant/api`
    pub base_url: String,
    /// Dump rendered requests and responses under [`WIRE_TARGET`]
    pub verbose: bool,
}

impl ClientOptions {
    pub fn new(base_url: impl Into<String>, verbose: bool) -> Self {
        Self { base_url: base_url.into(), verbose }
    }

    /// Build a request for `path` relative to the base URL.
    ///
    /// The path is appended verbatim (duplicate slashes are kept). The
    /// payload, when present, is serialized to JSON before anything else so
    /// that an unserializable payload never reaches the network.
    ///
    /// # Errors
    /// - [`ApiError::Serialization`] when the payload cannot be encoded
    /// - [`ApiError::InvalidRequest`] when the path contains control
    ///   characters or the joined URL does not parse
    pub fn build<P>(&self, method: Method, path: &str, payload: Option<&P>) -> Result<Request, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let body = payload
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|source| ApiError::Serialization {
                method: method.clone(),
                path: path.to_string(),
                source,
            })?;

        if path.chars().any(char::is_control) {
            return Err(ApiError::invalid_request(
                method,
                path.escape_default().to_string(),
                "path contains control characters",
            ));
        }

        let target = format!("{}{}", self.base_url, path);
        let url = Url::parse(&target)
            .map_err(|err| ApiError::invalid_request(method.clone(), target.as_str(), err.to_string()))?;

        let mut request = Request::new(method, url);
        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }

        if self.verbose {
            dump_request(&request);
        }

        Ok(request)
    }
}

/// Render headers one per line, redacting credentials.
pub(crate) fn render_headers(headers: &HeaderMap) -> String {
    let mut rendered = String::new();
    for (name, value) in headers {
        let value = if name == AUTHORIZATION {
            "[REDACTED]"
        } else {
            value.to_str().unwrap_or("<binary>")
        };
        let _ = writeln!(rendered, "{name}: {value}");
    }
    rendered
}

fn dump_request(request: &Request) {
    let body = request
        .body()
        .and_then(reqwest::Body::as_bytes)
        .map(String::from_utf8_lossy)
        .unwrap_or_default();

    info!(
        target: WIRE_TARGET,
        method = %request.method(),
        url = %request.url(),
        headers = %render_headers(request.headers()),
        body = %body,
        "request"
    );
}
