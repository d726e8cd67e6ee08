//! Configuration structures
//!
//! Loaded from environment variables or JSON/TOML files by
//! `dpa_infra::config`.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_API_PATH, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DpaConfig {
    pub service: ServiceConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<CredentialsConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote service endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Tenant URL, e.g. `https://example.dpa.cyberark.cloud`
    pub tenant_url: String,
    /// Path segment appended to the tenant URL
    #[serde(default = "default_api_path")]
    pub api_path: String,
    /// Dump rendered requests and responses
    #[serde(default)]
    pub verbose: bool,
    /// Overall timeout for the underlying HTTP sender
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServiceConfig {
    /// Create a configuration with defaults for everything but the tenant.
    #[must_use]
    pub fn new(tenant_url: impl Into<String>) -> Self {
        Self {
            tenant_url: tenant_url.into(),
            api_path: default_api_path(),
            verbose: false,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    /// API base URL (`{tenant_url}/{api_path}`).
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("{}/{}", self.tenant_url, self.api_path)
    }

    /// Overall sender timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// OAuth client credentials for token acquisition
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialsConfig {
    pub client_id: String,
    pub client_secret: String,
    /// OAuth application id; `None` selects the platform token endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_app_id: Option<String>,
    /// Identity tenant host, e.g. `example.cyberark.cloud`
    pub identity_url: String,
    #[serde(default)]
    pub scopes: Vec<String>,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("client_app_id", &self.client_app_id)
            .field("identity_url", &self.identity_url)
            .field("scopes", &self.scopes)
            .finish()
    }
}

/// Tracing subscriber settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter(), json: false }
    }
}

fn default_api_path() -> String {
    DEFAULT_API_PATH.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_log_filter() -> String {
    "info".to_string()
}
