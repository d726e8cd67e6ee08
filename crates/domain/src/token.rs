//! OAuth 2.0 access token as consumed by the invocation engine
//!
//! The engine treats the token as an opaque credential. Two checks are
//! exposed for the Service construction gate: the canonical token scheme and
//! expiry validity.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{BEARER_TOKEN_TYPE, TOKEN_EXPIRY_DELTA_SECS};

/// Access token with metadata
///
/// `expiry` of `None` means the token never expires.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Credential presented in the `Authorization` header
    pub access_token: String,

    /// Token type as issued (e.g. "Bearer", "bearer")
    #[serde(default)]
    pub token_type: String,

    /// Refresh token, when the grant issued one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Absolute expiration timestamp (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
}

impl Token {
    /// Create a token without expiry.
    #[must_use]
    pub fn new(access_token: impl Into<String>, token_type: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            refresh_token: None,
            expiry: None,
        }
    }

    /// Create a bearer token without expiry.
    #[must_use]
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self::new(access_token, BEARER_TOKEN_TYPE)
    }

    /// Set an absolute expiry.
    #[must_use]
    pub fn with_expiry(mut self, expiry: DateTime<Utc>) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Set the expiry relative to now.
    #[must_use]
    pub fn expires_in(self, lifetime: Duration) -> Self {
        self.with_expiry(Utc::now() + lifetime)
    }

    /// Attach a refresh token.
    #[must_use]
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Canonical authorization scheme.
    ///
    /// "bearer", "mac" and "basic" are matched case-insensitively and
    /// returned in their canonical spelling; an empty type defaults to
    /// "Bearer"; anything else is returned as issued.
    #[must_use]
    pub fn scheme(&self) -> &str {
        let raw = self.token_type.as_str();
        if raw.is_empty() || raw.eq_ignore_ascii_case("bearer") {
            BEARER_TOKEN_TYPE
        } else if raw.eq_ignore_ascii_case("mac") {
            "MAC"
        } else if raw.eq_ignore_ascii_case("basic") {
            "Basic"
        } else {
            raw
        }
    }

    /// `true` when the token expires within the expiry delta.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expiry.is_some_and(|expiry| {
            expiry - Duration::seconds(TOKEN_EXPIRY_DELTA_SECS) <= Utc::now()
        })
    }

    /// `true` when the token carries a credential and is not expired.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.access_token.is_empty() && !self.is_expired()
    }

    /// Value for the `Authorization` header, e.g. `Bearer abc123`.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        format!("{} {}", self.scheme(), self.access_token)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[REDACTED]"))
            .field("expiry", &self.expiry)
            .finish()
    }
}
